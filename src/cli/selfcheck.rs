//! Slither's own suite: checks phase ordering and skip handling using
//! nothing but the public registration API.

use std::cell::Cell;
use std::rc::Rc;

use crate::orchestrator::Orchestrator;
use crate::signal::{fail, pass};

/// Registers the self-check suite on `suite`.
///
/// With `demo_failure`, one extra test fails on purpose so the non-zero
/// exit path can be observed.
pub fn register(suite: &mut Orchestrator, demo_failure: bool) {
    let setup_ran = Rc::new(Cell::new(false));
    let test_ran = Rc::new(Cell::new(false));
    let teardown_ran = Rc::new(Cell::new(false));

    let flag = setup_ran.clone();
    suite.add_setup("Setup runs before test", move || {
        flag.set(true);
        Ok(())
    });

    let (setup, test, teardown) = (setup_ran.clone(), test_ran.clone(), teardown_ran.clone());
    suite.add_test("Test runs after setup", move || {
        test.set(true);
        if !setup.get() {
            fail("Test ran before setup")?;
        }
        if teardown.get() {
            fail("Test ran after teardown")?;
        }
        pass()
    });

    let flag = teardown_ran.clone();
    suite.add_teardown("Teardown runs last", move || {
        flag.set(true);
        Ok(())
    });

    let flag = setup_ran;
    suite.add_setup("Second setup runs after first", move || {
        if !flag.get() {
            fail("Second setup ran before first")?;
        }
        Ok(())
    });

    let flag = test_ran;
    suite.add_test("Second test runs after first", move || {
        if !flag.get() {
            fail("Second test ran before first")?;
        }
        pass()
    });

    let flag = teardown_ran;
    suite.add_teardown("Second teardown runs after first", move || {
        if !flag.get() {
            fail("Second teardown ran before first")?;
        }
        Ok(())
    });

    suite.add_skipped_setup("Skipped setups do not run", || fail("Skipped setup ran"));
    suite.add_skipped_test("Skipped tests do not run", || fail("Skipped test ran"));
    suite.add_skipped_teardown("Skipped teardowns do not run", || {
        fail("Skipped teardown ran")
    });

    if demo_failure {
        suite.add_test("Deliberate failure", || fail("demo failure requested"));
    }
}
