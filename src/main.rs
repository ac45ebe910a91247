mod export;
mod framework;
mod merge;
mod rows;

use std::time::Instant;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use rows::Row;

/// Framework documents to flatten. Output ordering follows this list, never
/// task completion order.
const FRAMEWORK_PATHS: &[&str] = &[
    "frameworks/engineering/backend.md",
    "frameworks/engineering/data.md",
    "frameworks/engineering/mobile.md",
    "frameworks/engineering/qualityanalyst.md",
    "frameworks/engineering/web.md",
    "frameworks/product.md",
    "frameworks/techops.md",
    "frameworks/generic.md",
];

const OUTPUT_PATH: &str = "Personal Development Framework.csv";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();

    let rows = collect_rows(FRAMEWORK_PATHS).await?;
    info!(
        "Projected {} rows from {} documents",
        rows.len(),
        FRAMEWORK_PATHS.len()
    );

    let merged = merge::combine_rows(rows);
    println!("{} merged rows", merged.len());

    export::write_csv(&merged, OUTPUT_PATH)?;
    println!("Wrote {}", OUTPUT_PATH);

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("Done in {:.1}s", elapsed.as_secs_f64());
    }

    Ok(())
}

/// Read, extract, and project every document concurrently. Each task owns its
/// path and builds its own row vector; results are combined in path-list
/// order, and the first failure aborts the whole run.
async fn collect_rows(paths: &[&str]) -> Result<Vec<Row>> {
    let pb = ProgressBar::new(paths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len}")?
            .progress_chars("=> "),
    );

    let mut handles = Vec::with_capacity(paths.len());
    for path in paths {
        let path = path.to_string();
        handles.push(tokio::spawn(async move {
            let text = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read {}", path))?;
            let doc = framework::extract_framework(&text)
                .with_context(|| format!("failed to parse {}", path))?;
            debug!(
                "{}: {} topics, {} levels",
                doc.title.as_deref().unwrap_or(&path),
                doc.topics.len(),
                doc.levels.unwrap_or(0)
            );
            Ok::<_, anyhow::Error>(rows::project_rows(&doc))
        }));
    }

    let mut rows = Vec::new();
    for handle in handles {
        rows.extend(handle.await??);
        pb.inc(1);
    }
    pb.finish_and_clear();

    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_document_fails_whole_run() {
        let err = collect_rows(&["tests/fixtures/backend.md", "no/such/file.md"])
            .await
            .unwrap_err();
        assert!(err.to_string().contains("no/such/file.md"));
    }

    #[tokio::test]
    async fn rows_follow_path_list_order() {
        let rows = collect_rows(&["tests/fixtures/backend.md", "tests/fixtures/web.md"])
            .await
            .unwrap();
        assert_eq!(rows.first().unwrap().role, "Engineer Backend");
        assert_eq!(rows.last().unwrap().role, "Engineer Web");
    }
}
