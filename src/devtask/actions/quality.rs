use crate::config::TaskConfig;
use crate::steps::{Invocation, Step};

fn pytest(config: &TaskConfig) -> Invocation {
    Invocation::new(&config.programs.pytest).args([config.workspace.test_dir.as_str(), "-v"])
}

pub fn test(config: &TaskConfig) -> Vec<Step> {
    vec![Step::run("Running tests", pytest(config))]
}

/// Terminal report with missing lines, plus an HTML report in `htmlcov/`.
pub fn test_with_coverage(config: &TaskConfig) -> Vec<Step> {
    vec![Step::run(
        "Running tests with coverage",
        pytest(config).args([
            format!("--cov={}", config.workspace.coverage_package),
            "--cov-report=term-missing".to_string(),
            "--cov-report=html".to_string(),
        ]),
    )]
}

/// Type-check, style-check, then format-check. All three always run.
pub fn lint(config: &TaskConfig) -> Vec<Step> {
    let ws = &config.workspace;
    vec![
        Step::run(
            "Running type checks (mypy)",
            Invocation::new(&config.programs.mypy).arg(ws.source_dir.as_str()),
        ),
        Step::run(
            "Running style checks (flake8)",
            Invocation::new(&config.programs.flake8).args([
                ws.source_dir.clone(),
                ws.test_dir.clone(),
                format!("--max-line-length={}", ws.max_line_length),
                "--statistics".to_string(),
            ]),
        ),
        Step::run(
            "Checking formatting (black)",
            Invocation::new(&config.programs.black).args([
                "--check",
                ws.source_dir.as_str(),
                ws.test_dir.as_str(),
            ]),
        ),
    ]
}

pub fn format(config: &TaskConfig) -> Vec<Step> {
    let ws = &config.workspace;
    let dirs = [
        ws.source_dir.as_str(),
        ws.test_dir.as_str(),
        ws.scripts_dir.as_str(),
    ];
    vec![
        Step::run(
            "Formatting code (black)",
            Invocation::new(&config.programs.black).args(dirs),
        ),
        Step::run(
            "Sorting imports (isort)",
            Invocation::new(&config.programs.isort).args(dirs),
        ),
    ]
}
