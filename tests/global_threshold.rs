// The process-wide threshold is shared by every test in this binary, so the
// scenarios run in one test function.

use hooklog::{global_threshold, set_global_threshold, Level, Logger};

fn emitted(logger: Logger<Vec<u8>>) -> Vec<String> {
    let out = String::from_utf8(logger.into_inner().unwrap()).unwrap();
    out.lines().map(str::to_string).collect()
}

fn run_all(logger: &Logger<Vec<u8>>) {
    logger.debug().msg("d");
    logger.info().msg("i");
    logger.warn().msg("w");
    logger.error().msg("e");
}

#[test]
fn global_threshold_gates_new_loggers() {
    assert_eq!(global_threshold().get(), Level::DEBUG);

    let logger = Logger::new(Vec::new());
    run_all(&logger);
    assert_eq!(emitted(logger).len(), 4);

    set_global_threshold(Level::INFO);
    let logger = Logger::new(Vec::new());
    run_all(&logger);
    let lines = emitted(logger);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(",level=Info,msg: i"));

    set_global_threshold(Level::WARNING);
    let logger = Logger::new(Vec::new());
    run_all(&logger);
    let lines = emitted(logger);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(",level=Warn,msg: w"));

    set_global_threshold(Level::DISABLED);
    let logger = Logger::new(Vec::new());
    run_all(&logger);
    assert!(emitted(logger).is_empty());

    set_global_threshold(Level::from_i8(100));
    assert_eq!(global_threshold().get().as_i8(), 100);
    let logger = Logger::new(Vec::new());
    run_all(&logger);
    logger.write("still here");
    let lines = emitted(logger);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(",msg: still here"));

    set_global_threshold(Level::DEBUG);
}
