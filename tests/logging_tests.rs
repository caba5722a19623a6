//! Tests that every execution path emits its log line

use std::io;
use std::sync::{Arc, Mutex};

use commandant::testing::StubCommand;
use commandant::{executor_for, DeferredExecutor, Executor, Outcome, ValidationError};
use tracing_subscriber::fmt::MakeWriter;

/// Writer that appends formatted log lines to a shared buffer
#[derive(Clone, Default)]
struct Buffer(Arc<Mutex<Vec<u8>>>);

impl Buffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Buffer {
    type Writer = Buffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture_logs(run: impl FnOnce()) -> String {
    let buffer = Buffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_writer(buffer.clone())
        .with_ansi(false)
        .without_time()
        .finish();

    tracing::subscriber::with_default(subscriber, run);
    buffer.contents()
}

#[test]
fn successful_execution_logs_at_debug() {
    let logged = capture_logs(|| {
        let executor = executor_for(|_: StubCommand| Outcome::valid(1));
        executor.execute(StubCommand::valid());
    });

    assert!(logged.contains("StubCommand executed successfully"), "got: {logged}");
}

#[test]
fn short_circuit_logs_the_failure_count() {
    let logged = capture_logs(|| {
        let executor = executor_for(|_: StubCommand| Outcome::valid(1));
        executor.execute(
            StubCommand::invalid()
                .with_error("email", ValidationError::required("email"))
                .with_error("name", ValidationError::required("name")),
        );
    });

    assert!(
        logged.contains("StubCommand failed validation with 2 failures"),
        "got: {logged}"
    );
}

#[test]
fn single_failure_is_not_pluralized() {
    let logged = capture_logs(|| {
        let executor = executor_for(|_: StubCommand| Outcome::valid(1));
        executor.execute(
            StubCommand::invalid().with_error("email", ValidationError::required("email")),
        );
    });

    assert!(
        logged.contains("StubCommand failed validation with 1 failure"),
        "got: {logged}"
    );
    assert!(!logged.contains("1 failures"), "got: {logged}");
}

#[test]
fn handler_failures_are_listed_in_the_completion_line() {
    let logged = capture_logs(|| {
        let executor = executor_for(|_: StubCommand| {
            Outcome::<i32>::failure(ValidationError::domain("balance too low"))
        });
        executor.execute(StubCommand::valid());
    });

    assert!(
        logged.contains("StubCommand completed with 1 failure: [balance too low]"),
        "got: {logged}"
    );
}

#[test]
fn handler_panic_logs_the_fault_detail_at_error_level() {
    let logged = capture_logs(|| {
        let executor =
            executor_for(|_: StubCommand| -> Outcome<i32> { panic!("db connection lost") });
        executor.execute(StubCommand::valid());
    });

    assert!(logged.contains("ERROR"), "got: {logged}");
    assert!(
        logged.contains("handler for StubCommand panicked: db connection lost"),
        "got: {logged}"
    );
    // the substituted outcome still gets its completion line
    assert!(
        logged.contains("completed with 1 failure: [Failed to execute stub command]"),
        "got: {logged}"
    );
}

#[test]
fn contract_breaking_field_entries_log_a_warning() {
    let logged = capture_logs(|| {
        let executor = executor_for(|_: StubCommand| Outcome::valid(1));
        executor.execute(
            StubCommand::invalid()
                .with_field(commandant::FieldError::valid("name"))
                .with_error("email", ValidationError::required("email")),
        );
    });

    assert!(logged.contains("WARN"), "got: {logged}");
    assert!(
        logged.contains("field 'name' carries no error"),
        "got: {logged}"
    );
}

#[test]
fn deferred_execution_logs_through_its_observer() {
    let logged = capture_logs(|| {
        tokio_test::block_on(async {
            let executor = executor_for(|_: StubCommand| async { Outcome::valid(1) });
            executor.execute(StubCommand::valid()).await;
        });
    });

    assert!(logged.contains("StubCommand executed successfully"), "got: {logged}");
}
