use crate::config::{ProducerParams, TaskConfig};
use crate::steps::{Invocation, Step};

/// The producer step, shared by `producer` and `producer-demo`.
pub fn steps(config: &TaskConfig, params: ProducerParams) -> Vec<Step> {
    vec![Step::run(
        format!(
            "Running producer ({} transactions, batch size {})",
            params.num_transactions, params.batch_size
        ),
        Invocation::new(&config.programs.python)
            .args(["-m", config.workspace.producer_module.as_str()])
            .args([
                "--num-transactions".to_string(),
                params.num_transactions.to_string(),
                "--batch-size".to_string(),
                params.batch_size.to_string(),
            ]),
    )]
}
