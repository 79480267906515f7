use crate::config::TaskConfig;
use crate::steps::{Invocation, Step};

/// `aws --endpoint-url=<endpoint> kinesis <operation> --stream-name <name>`
fn kinesis(config: &TaskConfig, operation: &str) -> Invocation {
    Invocation::new(&config.programs.aws)
        .arg(format!("--endpoint-url={}", config.stream.endpoint_url))
        .args(["kinesis", operation])
}

fn with_region(invocation: Invocation, config: &TaskConfig) -> Invocation {
    invocation.args(["--region", config.stream.region.as_str()])
}

pub fn verify(config: &TaskConfig) -> Vec<Step> {
    let describe = kinesis(config, "describe-stream")
        .args(["--stream-name", config.stream.name.as_str()]);
    vec![Step::run(
        format!("Describing stream {}", config.stream.name),
        with_region(describe, config),
    )]
}

/// Fetches a TRIM_HORIZON iterator for the first shard, then reads records with it.
pub fn read(config: &TaskConfig) -> Vec<Step> {
    let stream = &config.stream;

    let iterator = kinesis(config, "get-shard-iterator").args([
        "--stream-name",
        stream.name.as_str(),
        "--shard-id",
        stream.shard_id.as_str(),
        "--shard-iterator-type",
        "TRIM_HORIZON",
    ]);
    let iterator =
        with_region(iterator, config).args(["--query", "ShardIterator", "--output", "text"]);

    let records = kinesis(config, "get-records")
        .arg("--shard-iterator")
        .captured_arg()
        .args(["--limit".to_string(), stream.read_limit.to_string()]);

    vec![
        Step::capture(format!("Getting shard iterator for {}", stream.name), iterator),
        Step::run(
            format!("Reading the first {} records", stream.read_limit),
            with_region(records, config),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::StepKind;

    #[test]
    fn test_verify_describes_stream() {
        let steps = verify(&TaskConfig::default());
        assert_eq!(
            steps[0].invocation().unwrap().display(),
            "aws --endpoint-url=http://localhost:4566 kinesis describe-stream \
             --stream-name fraud-transactions --region us-east-1"
        );
    }

    #[test]
    fn test_read_captures_iterator_then_reads_five() {
        let steps = read(&TaskConfig::default());
        assert_eq!(steps.len(), 2);

        assert!(matches!(
            steps[0].kind,
            StepKind::Run {
                capture_output: true,
                ..
            }
        ));
        assert_eq!(
            steps[0].invocation().unwrap().display(),
            "aws --endpoint-url=http://localhost:4566 kinesis get-shard-iterator \
             --stream-name fraud-transactions --shard-id shardId-000000000000 \
             --shard-iterator-type TRIM_HORIZON --region us-east-1 \
             --query ShardIterator --output text"
        );

        let records = steps[1].invocation().unwrap();
        assert!(records.needs_capture());
        assert_eq!(
            records.display(),
            "aws --endpoint-url=http://localhost:4566 kinesis get-records \
             --shard-iterator <captured> --limit 5 --region us-east-1"
        );
    }
}
