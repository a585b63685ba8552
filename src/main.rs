//! Demo binary: three workers drain ten tasks with simulated latency.

use crewpool::{Config, Pool};
use std::time::Duration;

const WORKERS: usize = 3;
const TASKS: usize = 10;
const TASK_DELAY: Duration = Duration::from_millis(200);

fn main() {
    println!("=== crewpool demo starting ===");
    println!("workers: {}, tasks: {}", WORKERS, TASKS);
    println!();

    let result = Config::builder()
        .workers(WORKERS)
        .tasks(TASKS)
        .task_delay(TASK_DELAY)
        .build()
        .and_then(Pool::new)
        .and_then(|pool| pool.run());

    println!();
    match result {
        Ok(_) => println!("=== crewpool demo finished ==="),
        Err(e) => eprintln!("crewpool demo failed: {}", e),
    }
    println!("system shutdown complete");
}
