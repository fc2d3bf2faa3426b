//! Run a C++ submission through the executor and print the response

use judge_sandbox::{Executor, RunRequest};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let executor = Executor::new();

    println!("=== C++ submission ===");
    let code = r#"
#include <iostream>

int main() {
    for (int i = 1; i <= 3; ++i) {
        std::cout << "line " << i << "\n";
    }
    return 0;
}
"#;
    let report = executor.run(RunRequest::new("cpp", code)).await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    println!("\n=== Compilation error ===");
    let report = executor
        .run(RunRequest::new("cpp", "int main( {"))
        .await?;
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
