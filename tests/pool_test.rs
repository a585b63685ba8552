use crewpool::{
    CaptureSink, Config, DelayProcessor, Error, ErrorReport, Pool, Processor, Task, WorkerId,
};
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

/// Fails processing of one specific label, delegates the rest.
struct FaultOn {
    label: &'static str,
    inner: DelayProcessor,
}

impl FaultOn {
    fn new(label: &'static str, delay: Duration) -> Self {
        FaultOn {
            label,
            inner: DelayProcessor::new(delay),
        }
    }
}

impl Processor for FaultOn {
    fn process(&self, worker: WorkerId, task: &Task) -> crewpool::Result<()> {
        if task.label() == self.label {
            return Err(Error::task_failed(format!("injected fault on {}", task)));
        }
        self.inner.process(worker, task)
    }
}

fn run_pool(
    workers: usize,
    tasks: usize,
    delay: Duration,
    processor: Option<Arc<dyn Processor>>,
) -> (Vec<String>, Option<ErrorReport>) {
    let sink = Arc::new(CaptureSink::new());
    let config = Config::builder()
        .workers(workers)
        .tasks(tasks)
        .task_delay(delay)
        .build()
        .unwrap();

    let mut pool = Pool::new(config).unwrap().with_sink(sink.clone());
    if let Some(processor) = processor {
        pool = pool.with_processor(processor);
    }

    let report = pool.run().unwrap();
    (sink.lines(), report)
}

fn processed_labels(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .filter_map(|l| l.split(" processed ").nth(1).map(str::to_string))
        .collect()
}

fn label_counts(labels: &[String]) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for label in labels {
        *counts.entry(label.as_str()).or_insert(0) += 1;
    }
    counts
}

#[test]
fn test_three_workers_ten_tasks_no_faults() {
    let (lines, report) = run_pool(3, 10, Duration::from_millis(10), None);

    assert!(report.is_none());

    // exactly ten processed notifications, one per label
    let labels = processed_labels(&lines);
    assert_eq!(labels.len(), 10);
    let counts = label_counts(&labels);
    for i in 1..=10 {
        assert_eq!(counts.get(format!("Task {}", i).as_str()), Some(&1));
    }

    // every processed line is attributed to one of the three workers
    for line in lines.iter().filter(|l| l.contains(" processed ")) {
        let attributed = (1..=3).any(|id| line.starts_with(&format!("worker {} ", id)));
        assert!(attributed, "unattributed line: {}", line);
    }

    assert!(lines.contains(&"no errors reported".to_string()));
}

#[test]
fn test_zero_tasks_terminates_cleanly() {
    let (lines, report) = run_pool(3, 0, Duration::from_millis(0), None);

    assert!(report.is_none());
    assert!(processed_labels(&lines).is_empty());

    // every worker starts, observes exhaustion, and completes
    for id in 1..=3 {
        assert!(lines.contains(&format!("worker {} started", id)));
        assert!(lines.contains(&format!("worker {} completed all tasks", id)));
    }
    assert!(lines.contains(&"no errors reported".to_string()));
}

#[test]
fn test_injected_fault_is_surfaced_and_contained() {
    let processor = Arc::new(FaultOn::new("Task 5", Duration::from_millis(5)));
    let (lines, report) = run_pool(3, 10, Duration::from_millis(5), Some(processor));

    // exactly one report, attributed to the worker that held Task 5
    let report = report.expect("fault should be surfaced");
    assert!(report.cause().contains("injected fault on Task 5"));
    assert!((1..=3).contains(&report.worker()));

    let advisory = lines
        .iter()
        .filter(|l| l.starts_with("error occurred: "))
        .count();
    assert_eq!(advisory, 1);

    // the other workers keep draining: everything but Task 5 is processed
    let labels = processed_labels(&lines);
    assert_eq!(labels.len(), 9);
    assert!(!labels.contains(&"Task 5".to_string()));
    let counts = label_counts(&labels);
    for i in (1..=10).filter(|&i| i != 5) {
        assert_eq!(counts.get(format!("Task {}", i).as_str()), Some(&1));
    }

    // the faulted worker stopped without crashing the run
    let completed = lines
        .iter()
        .filter(|l| l.contains("completed all tasks"))
        .count();
    assert_eq!(completed, 2);
}

#[test]
fn test_every_task_processed_exactly_once() {
    let (lines, report) = run_pool(4, 32, Duration::from_millis(1), None);

    assert!(report.is_none());
    let labels = processed_labels(&lines);
    assert_eq!(labels.len(), 32);
    let counts = label_counts(&labels);
    assert_eq!(counts.len(), 32);
    assert!(counts.values().all(|&n| n == 1));
}

#[test]
fn test_run_returns_only_after_all_workers_finish() {
    let (lines, _) = run_pool(4, 8, Duration::from_millis(30), None);

    // the barrier line comes after every processed line
    let barrier = lines
        .iter()
        .position(|l| l == "all workers completed")
        .expect("barrier line missing");
    let last_processed = lines
        .iter()
        .rposition(|l| l.contains(" processed "))
        .expect("no processed lines");
    assert!(barrier > last_processed);

    // and nothing was left behind when run returned
    assert_eq!(processed_labels(&lines).len(), 8);
}

#[test]
fn test_single_worker_preserves_fifo_order() {
    let (lines, report) = run_pool(1, 5, Duration::from_millis(0), None);

    assert!(report.is_none());
    let labels = processed_labels(&lines);
    let expected: Vec<String> = (1..=5).map(|i| format!("Task {}", i)).collect();
    assert_eq!(labels, expected);
}

#[test]
fn test_coordinator_narrates_population() {
    let (lines, _) = run_pool(2, 3, Duration::from_millis(0), None);

    assert!(lines.contains(&"initializing queue with 3 tasks".to_string()));
    for i in 1..=3 {
        assert!(lines.contains(&format!("queued Task {}", i)));
    }
    assert!(lines.contains(&"starting 2 workers".to_string()));
}
