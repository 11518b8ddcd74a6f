use std::sync::Arc;

use hooklog::{FieldHook, Level, Logger, Threshold};
use regex::Regex;

const TIME: &str = r"time=\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}";

fn output(logger: Logger<Vec<u8>>) -> String {
    String::from_utf8(logger.into_inner().unwrap()).unwrap()
}

#[test]
fn default_run_with_info_threshold() {
    let logger = Logger::with_threshold(Vec::new(), Arc::new(Threshold::new(Level::INFO)));
    for msg in ["Testing", "Testing1"] {
        logger.info().msg(msg);
    }
    for msg in ["Testing", "Testing1"] {
        logger.warn().msg(msg);
    }
    for msg in ["Testing", "Testing1"] {
        logger.error().msg(msg);
    }
    let re = Regex::new(&format!(
        r"^{t},level=Info,msg: Testing\n{t},level=Info,msg: Testing1\n$",
        t = TIME
    ))
    .unwrap();
    let out = output(logger);
    assert!(re.is_match(&out), "{:?}", out);
}

#[test]
fn shared_threshold_across_loggers() {
    let threshold = Arc::new(Threshold::new(Level::ERROR));
    let a = Logger::with_threshold(Vec::new(), Arc::clone(&threshold))
        .hook(FieldHook::new("who", "a"));
    let b = Logger::with_threshold(Vec::new(), Arc::clone(&threshold))
        .hook(FieldHook::new("who", "b"));

    a.error().msg("one");
    b.info().msg("two");
    threshold.set(Level::INFO);
    b.info().msg("three");

    assert!(output(a).ends_with(",who=a,level=Error,msg: one\n"));
    assert!(output(b).ends_with(",who=b,level=Info,msg: three\n"));
}

#[test]
fn try_variants_succeed_on_memory_sinks() {
    let logger = Logger::with_threshold(Vec::new(), Arc::new(Threshold::new(Level::DEBUG)));
    logger.warn().try_msg("ok").unwrap();
    logger.try_write("raw").unwrap();
    let out = output(logger);
    assert_eq!(out.lines().count(), 2);
    assert!(out.lines().last().unwrap().ends_with(",msg: raw"));
}
