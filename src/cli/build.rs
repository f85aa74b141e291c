//! Build command implementation.
//!
//! Scans project sources for class names and writes the generated
//! stylesheet. With `--watch`, rebuilds whenever a file under the project
//! root changes.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use clap::Args;
use notify::{EventKind, RecursiveMode, Watcher};

use crate::config::MANIFEST_FILENAME;
use crate::discovery::{discover_with_manifest, DiscoveryResult};
use crate::engine::Engine;
use crate::error::{AtomError, Result};
use crate::output::{display_path, plural, Printer};

/// Quiet period used to coalesce bursts of file events.
const DEBOUNCE: Duration = Duration::from_millis(75);

/// Scan sources and write the stylesheet
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Project root (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Manifest file (default: <path>/atomcss.yaml)
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Override the manifest's output path
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Rebuild when sources change
    #[arg(long, short)]
    pub watch: bool,
}

/// Counts from one build pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildSummary {
    pub files: usize,
    pub rules: usize,
    pub skipped: usize,
}

/// One project: its discovered sources and the engine fed from them.
pub struct Project {
    root: PathBuf,
    manifest_path: PathBuf,
    output_override: Option<PathBuf>,
    discovery: DiscoveryResult,
    engine: Engine,
}

impl Project {
    pub fn load(args: &BuildArgs) -> Result<Self> {
        let manifest_path = args
            .config
            .clone()
            .unwrap_or_else(|| args.path.join(MANIFEST_FILENAME));
        let discovery = discover_with_manifest(&args.path, &manifest_path)?;
        let engine = discovery.engine()?;

        Ok(Self {
            root: args.path.clone(),
            manifest_path,
            output_override: args.output.clone(),
            discovery,
            engine,
        })
    }

    /// A fresh project with the same root, manifest path and output override.
    fn reload(&self) -> Result<Project> {
        Project::load(&BuildArgs {
            path: self.root.clone(),
            config: Some(self.manifest_path.clone()),
            output: self.output_override.clone(),
            watch: true,
        })
    }

    pub fn output_path(&self) -> PathBuf {
        self.output_override
            .clone()
            .unwrap_or_else(|| self.discovery.output_path())
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Re-scan sources, keeping the current manifest and engine.
    pub fn rescan(&mut self) -> Result<()> {
        self.discovery = discover_with_manifest(&self.root, &self.manifest_path)?;
        Ok(())
    }

    /// Rebuild from scratch: reset the engine, process every source, write.
    pub fn build(&mut self) -> Result<BuildSummary> {
        self.engine.reset();
        self.engine.process_reserved();

        for classes in self.discovery.class_names()? {
            self.engine.process(&classes);
        }

        write_stylesheet(&self.output_path(), &self.engine.emit())?;

        Ok(BuildSummary {
            files: self.discovery.scan.total(),
            rules: self.engine.rule_count(),
            skipped: self.engine.diagnostics().len(),
        })
    }
}

pub fn run(args: BuildArgs, printer: &Printer) -> Result<()> {
    printer.status("Scanning", &display_path(&args.path));

    let mut project = Project::load(&args)?;
    printer.diagnostics(project.engine().config_warnings());
    build_and_report(&mut project, printer)?;

    if args.watch {
        watch(&mut project, printer)?;
    }

    Ok(())
}

fn build_and_report(project: &mut Project, printer: &Printer) -> Result<()> {
    let summary = project.build()?;

    printer.diagnostics(project.engine().diagnostics());
    printer.status(
        "Generated",
        &format!(
            "{} from {} -> {}",
            plural(summary.rules, "rule", "rules"),
            plural(summary.files, "file", "files"),
            display_path(&project.output_path())
        ),
    );

    Ok(())
}

fn watch(project: &mut Project, printer: &Printer) -> Result<()> {
    let (tx, rx) = mpsc::channel::<notify::Result<notify::Event>>();
    let mut watcher = notify::recommended_watcher(tx).map_err(watch_error)?;
    watcher
        .watch(&project.root, RecursiveMode::Recursive)
        .map_err(watch_error)?;

    printer.info("Watching", &display_path(&project.root));

    while let Ok(first) = rx.recv() {
        let mut burst = Vec::new();
        let mut next = Some(first);
        // coalesce the rest of the burst
        while let Some(received) = next.take() {
            match received {
                Ok(event) => burst.push(event),
                Err(e) => printer.warning("warning", &e.to_string()),
            }
            next = rx.recv_timeout(DEBOUNCE).ok();
        }

        let output = project.output_path();
        let result = match classify_burst(&burst, &output, &project.manifest_path) {
            None => continue,
            Some(Change::Manifest) => {
                printer.info("Reloading", MANIFEST_FILENAME);
                project.reload().map(|fresh| *project = fresh)
            }
            Some(Change::Sources) => project.rescan(),
        };

        if let Err(e) = result.and_then(|_| build_and_report(project, printer)) {
            printer.error("error", &e.to_string());
        }
    }

    Ok(())
}

/// What a burst of file events requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    /// Sources changed: rescan with the current engine.
    Sources,
    /// The manifest changed: rebuild the engine from it.
    Manifest,
}

/// Decide how to react to a burst of events.
///
/// Access events and events touching only the output file are ignored. Any
/// event on the manifest anywhere in the burst forces a reload.
fn classify_burst(events: &[notify::Event], output: &Path, manifest: &Path) -> Option<Change> {
    let relevant: Vec<&notify::Event> = events
        .iter()
        .filter(|e| !matches!(e.kind, EventKind::Access(_)))
        .filter(|e| !e.paths.iter().all(|p| same_file(p, output)))
        .collect();

    if relevant.is_empty() {
        None
    } else if relevant
        .iter()
        .any(|e| e.paths.iter().any(|p| same_file(p, manifest)))
    {
        Some(Change::Manifest)
    } else {
        Some(Change::Sources)
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    let canonical = |p: &Path| p.canonicalize().unwrap_or_else(|_| p.to_path_buf());
    a == b || canonical(a) == canonical(b)
}

fn watch_error(e: notify::Error) -> AtomError {
    AtomError::Build {
        message: format!("Failed to watch sources: {}", e),
        help: None,
    }
}

/// Write the stylesheet, creating parent directories as needed.
pub fn write_stylesheet(path: &Path, css: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| AtomError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    fs::write(path, css).map_err(|e| AtomError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write stylesheet: {}", e),
    })
}
