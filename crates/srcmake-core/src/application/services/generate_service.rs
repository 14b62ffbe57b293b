//! Generate Service - the file expansion driver.
//!
//! This service coordinates one generation request:
//! 1. Resolve the requested file type into the concrete file types to emit
//! 2. For each one: load its template, render it, write it
//!
//! Writing is best-effort, not transactional: if a later file fails, files
//! already written for the same request stay on disk.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateStore},
    domain::{FileType, GenerationRequest, capabilities, macros},
    error::SrcmakeResult,
};

/// One file a request will produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub file_type: FileType,
    pub path: PathBuf,
}

/// A planned file together with its rendered content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFile {
    pub file_type: FileType,
    pub path: PathBuf,
    pub content: String,
}

/// File expansion driver.
pub struct GenerateService {
    store: Box<dyn TemplateStore>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(store: Box<dyn TemplateStore>, filesystem: Box<dyn Filesystem>) -> Self {
        Self { store, filesystem }
    }

    /// The files `request` would write into `out_dir`, in order.
    pub fn plan(&self, request: &GenerationRequest, out_dir: &Path) -> SrcmakeResult<Vec<PlannedFile>> {
        request
            .resolved_file_types()?
            .into_iter()
            .map(|file_type| -> SrcmakeResult<PlannedFile> {
                let ext = capabilities::file_extension(request.language(), file_type)?;
                Ok(PlannedFile {
                    file_type,
                    path: out_dir.join(format!("{}.{ext}", request.name())),
                })
            })
            .collect()
    }

    /// Preview using the current local time.
    pub fn preview(&self, request: &GenerationRequest, out_dir: &Path) -> SrcmakeResult<Vec<RenderedFile>> {
        self.preview_at(request, out_dir, Local::now().naive_local())
    }

    /// Render every planned file without touching the filesystem.
    #[instrument(skip_all, fields(run = %request.id(), request = %request))]
    pub fn preview_at(
        &self,
        request: &GenerationRequest,
        out_dir: &Path,
        now: NaiveDateTime,
    ) -> SrcmakeResult<Vec<RenderedFile>> {
        self.plan(request, out_dir)?
            .into_iter()
            .map(|planned| self.render_one(request, planned, now))
            .collect()
    }

    /// Generate using the current local time.
    pub fn generate(&self, request: &GenerationRequest, out_dir: &Path) -> SrcmakeResult<Vec<PathBuf>> {
        self.generate_at(request, out_dir, Local::now().naive_local())
    }

    /// Generate every file of `request` into `out_dir`.
    ///
    /// Returns the written paths. On failure, earlier files of the same
    /// request are left in place.
    #[instrument(
        skip_all,
        fields(
            run = %request.id(),
            request = %request,
            out_dir = %out_dir.display()
        )
    )]
    pub fn generate_at(
        &self,
        request: &GenerationRequest,
        out_dir: &Path,
        now: NaiveDateTime,
    ) -> SrcmakeResult<Vec<PathBuf>> {
        let planned = self.plan(request, out_dir)?;
        info!(files = planned.len(), "Generating");

        if !out_dir.as_os_str().is_empty() && !self.filesystem.exists(out_dir) {
            self.filesystem.create_dir_all(out_dir)?;
        }

        let mut written = Vec::with_capacity(planned.len());

        for file in planned {
            if let Err(e) = self.emit(request, file, now, &mut written) {
                if !written.is_empty() {
                    warn!(
                        error = %e,
                        left_behind = ?written,
                        "Generation aborted, files already written are kept"
                    );
                }
                return Err(e);
            }
        }

        info!("Generation completed successfully");
        Ok(written)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn emit(
        &self,
        request: &GenerationRequest,
        planned: PlannedFile,
        now: NaiveDateTime,
        written: &mut Vec<PathBuf>,
    ) -> SrcmakeResult<()> {
        let rendered = self.render_one(request, planned, now)?;

        if self.filesystem.exists(&rendered.path) {
            info!(path = %rendered.path.display(), "Overwriting existing file");
        }
        self.filesystem.write_file(&rendered.path, &rendered.content)?;

        debug!(path = %rendered.path.display(), bytes = rendered.content.len(), "Wrote file");
        written.push(rendered.path);
        Ok(())
    }

    fn render_one(
        &self,
        request: &GenerationRequest,
        planned: PlannedFile,
        now: NaiveDateTime,
    ) -> SrcmakeResult<RenderedFile> {
        let resolved = request.for_file_type(planned.file_type);

        let template = self
            .store
            .load(resolved.language(), resolved.file_type())
            .inspect_err(|e| warn!(error = %e, file_type = %planned.file_type, "Template load failed"))?;

        let content = macros::render(&resolved, &template, now)?;

        Ok(RenderedFile {
            file_type: planned.file_type,
            path: planned.path,
            content,
        })
    }
}
