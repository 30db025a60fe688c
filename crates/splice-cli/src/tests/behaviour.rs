//! Behaviour-driven tests for the `splice` runtime.

use std::cell::RefCell;
use std::process::ExitCode;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use super::support::{ORDER_HISTORY, TestWorld};

#[fixture]
fn world() -> RefCell<TestWorld> {
    RefCell::new(TestWorld::new().expect("test world"))
}

#[given("the target holds the order history source")]
fn given_order_history(world: &RefCell<TestWorld>) {
    world
        .borrow()
        .write_target(ORDER_HISTORY)
        .expect("write target");
}

#[given("the target holds source without the message state declaration")]
fn given_unrelated_source(world: &RefCell<TestWorld>) {
    world
        .borrow()
        .write_target("const unrelated = useState(0);\n")
        .expect("write target");
}

#[when("the operator runs splice")]
fn when_operator_runs(world: &RefCell<TestWorld>) {
    world.borrow_mut().run(&[]);
}

#[when("the operator runs splice --strict")]
fn when_operator_runs_strict(world: &RefCell<TestWorld>) {
    world.borrow_mut().run(&["--strict"]);
}

#[then("the CLI succeeds")]
fn then_success(world: &RefCell<TestWorld>) {
    assert_eq!(world.borrow().exit_code(), ExitCode::SUCCESS);
}

#[then("the CLI fails")]
fn then_failure(world: &RefCell<TestWorld>) {
    assert_eq!(world.borrow().exit_code(), ExitCode::FAILURE);
}

#[then("stdout contains {snippet}")]
fn then_stdout_contains(world: &RefCell<TestWorld>, snippet: String) {
    let stdout = world.borrow().stdout_text();
    let needle = snippet.trim_matches('"');
    assert!(stdout.contains(needle), "stdout {stdout:?} lacks {needle:?}");
}

#[then("stderr contains {snippet}")]
fn then_stderr_contains(world: &RefCell<TestWorld>, snippet: String) {
    let stderr = world.borrow().stderr_text();
    let needle = snippet.trim_matches('"');
    assert!(stderr.contains(needle), "stderr {stderr:?} lacks {needle:?}");
}

#[then("the target contains {snippet}")]
fn then_target_contains(world: &RefCell<TestWorld>, snippet: String) {
    let contents = world.borrow().read_target().expect("read target");
    assert!(contents.contains(snippet.trim_matches('"')));
}

#[scenario(
    path = "tests/features/splice_cli.feature",
    name = "Patching the order details file"
)]
fn patching_order_details(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/splice_cli.feature",
    name = "Re-running splice is a no-op"
)]
fn rerunning_is_noop(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(
    path = "tests/features/splice_cli.feature",
    name = "Strict mode rejects a drifted file"
)]
fn strict_mode_rejects_drift(world: RefCell<TestWorld>) {
    let _ = world;
}

#[scenario(path = "tests/features/splice_cli.feature", name = "Missing target file")]
fn missing_target_file(world: RefCell<TestWorld>) {
    let _ = world;
}
