//! Run a Python submission through the executor and print the response

use judge_sandbox::{Executor, RunRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let executor = Executor::new();

    println!("=== Python submission ===");
    let code = r#"
class Solution:
    def main(self):
        total = sum(range(10))
        print(f"partial sums done, total={total}")
        return total
"#;
    let report = executor
        .run(RunRequest::new("python", code))
        .await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!("\n=== Missing entry point ===");
    let report = executor
        .run(RunRequest::new("python", "print('no Solution here')"))
        .await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
