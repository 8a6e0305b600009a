//! Build command - Transpile pug AST files

use clap::{Args, ValueEnum};
use glob::{MatchOptions, Pattern};
use ignore::Walk;
use pupper::config::{load_config, PupperConfig};
use pupper::{emit_module, rewrite_source, transpile, ModuleFormat, TranspileError, TranspileOptions};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

/// Suffix of the files `pug-parser` output is stored in.
const SOURCE_SUFFIX: &str = ".pug.json";

const DEFAULT_PATTERN: &str = "./**/*.pug.json";
const DEFAULT_OUTPUT: &str = "./dist";

#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// JavaScript module exporting the template string
    #[default]
    Module,
    /// Vue template markup
    Markup,
    /// Rewritten template tree as JSON
    Ast,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            OutputFormat::Module => "js",
            OutputFormat::Markup => "html",
            OutputFormat::Ast => "ast.json",
        }
    }
}

#[derive(Args, Default)]
pub struct BuildArgs {
    /// Glob pattern(s) to match pug AST files (default: config `include`, then ./**/*.pug.json)
    pub patterns: Vec<String>,

    /// Output directory (default: config `outDir`, then ./dist)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "module")]
    pub format: OutputFormat,

    /// Module wrapper (overrides config `module`)
    #[arg(long, value_enum)]
    pub module: Option<ModuleFormat>,

    /// Render HTML5 markup (bare boolean attributes, `<br>`)
    #[arg(long)]
    pub terse: bool,

    /// Number of threads (default: number of CPUs)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Continue on errors
    #[arg(long)]
    pub continue_on_error: bool,
}

/// Build settings after merging CLI flags over the config file.
#[derive(Debug)]
struct BuildSettings {
    patterns: Vec<String>,
    output: PathBuf,
    format: OutputFormat,
    module: ModuleFormat,
    terse: bool,
}

impl BuildSettings {
    fn resolve(args: &BuildArgs, config: PupperConfig) -> Self {
        let patterns = if !args.patterns.is_empty() {
            args.patterns.clone()
        } else if !config.include.is_empty() {
            config.include
        } else {
            vec![DEFAULT_PATTERN.to_string()]
        };

        Self {
            patterns,
            output: args
                .output
                .clone()
                .or(config.out_dir)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            format: args.format,
            module: args.module.unwrap_or(config.module),
            terse: args.terse || config.terse,
        }
    }
}

#[derive(Debug, Default)]
struct BuildStats {
    success: AtomicUsize,
    failed: AtomicUsize,
}

pub fn run(args: BuildArgs) {
    let start = Instant::now();

    if let Some(threads) = args.threads {
        if let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            tracing::warn!("Failed to configure thread pool: {}", e);
        }
    }

    let settings = BuildSettings::resolve(&args, load_config(None));
    tracing::debug!(?settings, "resolved build settings");

    let files = collect_files(&settings.patterns);
    if files.is_empty() {
        eprintln!("No {} files found matching the patterns", SOURCE_SUFFIX);
        std::process::exit(1);
    }

    tracing::info!(
        files = files.len(),
        threads = rayon::current_num_threads(),
        "transpiling"
    );

    let stats = BuildStats::default();
    let results: Vec<_> = files
        .par_iter()
        .map(|path| match build_file(path, &settings) {
            Ok(output) => {
                stats.success.fetch_add(1, Ordering::Relaxed);
                Some((path.clone(), output))
            }
            Err(e) => {
                stats.failed.fetch_add(1, Ordering::Relaxed);
                eprintln!("Error transpiling {}: {}", path.display(), e);

                if !args.continue_on_error {
                    std::process::exit(1);
                }

                None
            }
        })
        .collect();

    if let Err(e) = fs::create_dir_all(&settings.output) {
        eprintln!(
            "Failed to create output directory {}: {}",
            settings.output.display(),
            e
        );
        std::process::exit(1);
    }

    for (path, output) in results.into_iter().flatten() {
        let out_path = settings
            .output
            .join(output_file_name(&path, settings.format));
        match fs::write(&out_path, output) {
            Ok(()) => tracing::debug!(path = %out_path.display(), "wrote output"),
            Err(e) => {
                stats.failed.fetch_add(1, Ordering::Relaxed);
                eprintln!("Failed to write {}: {}", out_path.display(), e);
            }
        }
    }

    let elapsed = start.elapsed();
    let success = stats.success.load(Ordering::Relaxed);
    let failed = stats.failed.load(Ordering::Relaxed);

    if failed > 0 {
        eprintln!(
            "✗ {} file(s) failed, {} transpiled in {:.4}s",
            failed,
            success,
            elapsed.as_secs_f64()
        );
        std::process::exit(1);
    }

    let file_word = if success == 1 { "file" } else { "files" };
    eprintln!(
        "✓ {} {} transpiled in {:.4}s",
        success,
        file_word,
        elapsed.as_secs_f64()
    );
}

fn build_file(path: &Path, settings: &BuildSettings) -> Result<String, TranspileError> {
    let source = fs::read_to_string(path).map_err(|source| TranspileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut options = TranspileOptions::with_filename(path.display().to_string());
    options.render.terse = settings.terse;

    match settings.format {
        OutputFormat::Module => Ok(emit_module(&transpile(&source, &options)?, settings.module)),
        OutputFormat::Markup => transpile(&source, &options),
        OutputFormat::Ast => Ok(serde_json::to_string_pretty(&rewrite_source(
            &source, &options,
        )?)?),
    }
}

/// `page.pug.json` -> `page.js` (or `page.html`, `page.ast.json`).
fn output_file_name(path: &Path, format: OutputFormat) -> PathBuf {
    let name = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    let stem = name
        .strip_suffix(SOURCE_SUFFIX)
        .or_else(|| name.strip_suffix(".json"))
        .unwrap_or(&name);
    PathBuf::from(format!("{}.{}", stem, format.extension()))
}

fn collect_files(patterns: &[String]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for pattern in patterns {
        let (root, glob_pattern) = parse_pattern(pattern);
        let matcher = match Pattern::new(strip_dot_slash(&glob_pattern)) {
            Ok(matcher) => matcher,
            Err(e) => {
                tracing::warn!("Invalid pattern {}: {}", pattern, e);
                continue;
            }
        };

        for entry in Walk::new(&root).flatten() {
            let path = entry.path();

            if is_source_file(path) && pattern_matches(path, &matcher) {
                files.push(path.to_path_buf());
            }
        }
    }

    files.sort();
    files.dedup();
    files
}

/// Split a pattern into the directory to walk and the glob to match.
fn parse_pattern(pattern: &str) -> (String, String) {
    if let Some(pos) = pattern.find(['*', '?', '[']) {
        let root_part = &pattern[..pos];
        let root = match root_part.rfind('/') {
            Some(last_slash) => &pattern[..last_slash],
            None => ".",
        };
        let root = if root.is_empty() { "." } else { root };
        return (root.to_string(), pattern.to_string());
    }

    let path = Path::new(pattern);
    if path.is_dir() {
        let dir = pattern.trim_end_matches('/');
        return (dir.to_string(), format!("{}/**/*{}", dir, SOURCE_SUFFIX));
    }

    if path.is_file() {
        if let Some(parent) = path.parent() {
            let parent_str = parent.to_string_lossy();
            let parent_str = if parent_str.is_empty() {
                "."
            } else {
                &parent_str
            };
            return (parent_str.to_string(), pattern.to_string());
        }
    }

    (".".to_string(), pattern.to_string())
}

fn is_source_file(path: &Path) -> bool {
    path.is_file() && path.to_string_lossy().ends_with(SOURCE_SUFFIX)
}

fn pattern_matches(path: &Path, matcher: &Pattern) -> bool {
    let path_str = path.to_string_lossy().replace('\\', "/");
    let options = MatchOptions {
        require_literal_separator: true,
        ..MatchOptions::new()
    };
    matcher.matches_with(strip_dot_slash(&path_str), options)
}

fn strip_dot_slash(path: &str) -> &str {
    path.strip_prefix("./").unwrap_or(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(pattern: &str, path: &str) -> bool {
        let (_, glob_pattern) = parse_pattern(pattern);
        let matcher = Pattern::new(strip_dot_slash(&glob_pattern)).unwrap();
        pattern_matches(Path::new(path), &matcher)
    }

    #[test]
    fn test_parse_pattern_roots() {
        assert_eq!(
            parse_pattern("./**/*.pug.json"),
            (".".to_string(), "./**/*.pug.json".to_string())
        );
        assert_eq!(
            parse_pattern("src/views/**/*.pug.json"),
            ("src/views".to_string(), "src/views/**/*.pug.json".to_string())
        );
        assert_eq!(
            parse_pattern("*.pug.json"),
            (".".to_string(), "*.pug.json".to_string())
        );
    }

    #[test]
    fn test_pattern_matching() {
        assert!(matches("./**/*.pug.json", "./a.pug.json"));
        assert!(matches("./**/*.pug.json", "./src/views/a.pug.json"));
        assert!(matches("src/**/*.pug.json", "src/a/b.pug.json"));
        assert!(!matches("src/**/*.pug.json", "lib/b.pug.json"));
        assert!(matches("*.pug.json", "./a.pug.json"));
        assert!(!matches("*.pug.json", "./nested/a.pug.json"));
    }

    #[test]
    fn test_output_file_name() {
        let path = Path::new("src/views/home.pug.json");
        assert_eq!(
            output_file_name(path, OutputFormat::Module),
            PathBuf::from("home.js")
        );
        assert_eq!(
            output_file_name(path, OutputFormat::Markup),
            PathBuf::from("home.html")
        );
        assert_eq!(
            output_file_name(path, OutputFormat::Ast),
            PathBuf::from("home.ast.json")
        );
        assert_eq!(
            output_file_name(Path::new("other.json"), OutputFormat::Module),
            PathBuf::from("other.js")
        );
    }

    #[test]
    fn test_settings_prefer_flags_over_config() {
        let config = PupperConfig {
            module: ModuleFormat::Esm,
            terse: true,
            out_dir: Some(PathBuf::from("build")),
            include: vec!["views/**/*.pug.json".to_string()],
            ..Default::default()
        };

        let settings = BuildSettings::resolve(&BuildArgs::default(), config.clone());
        assert_eq!(settings.patterns, ["views/**/*.pug.json"]);
        assert_eq!(settings.output, PathBuf::from("build"));
        assert_eq!(settings.module, ModuleFormat::Esm);
        assert!(settings.terse);

        let args = BuildArgs {
            patterns: vec!["a.pug.json".to_string()],
            output: Some(PathBuf::from("out")),
            module: Some(ModuleFormat::CommonJs),
            ..Default::default()
        };
        let settings = BuildSettings::resolve(&args, config);
        assert_eq!(settings.patterns, ["a.pug.json"]);
        assert_eq!(settings.output, PathBuf::from("out"));
        assert_eq!(settings.module, ModuleFormat::CommonJs);
    }

    #[test]
    fn test_settings_defaults() {
        let settings = BuildSettings::resolve(&BuildArgs::default(), PupperConfig::default());
        assert_eq!(settings.patterns, [DEFAULT_PATTERN]);
        assert_eq!(settings.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(settings.format, OutputFormat::Module);
        assert_eq!(settings.module, ModuleFormat::CommonJs);
        assert!(!settings.terse);
    }
}
