use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_buffer_terminates_each_line() {
    let sink = BufferPrintHandler::new();
    sink.println("one");
    sink.println("");
    sink.println("two");
    assert_eq!(sink.get_output(), "one\n\ntwo\n");
}

#[test]
fn test_buffer_take_output_drains() {
    let handler = buffer_handler();
    handler.println("first");
    assert_eq!(handler.take_output(), "first\n");
    assert_eq!(handler.get_output(), "");
    handler.println("second");
    assert_eq!(handler.take_output(), "second\n");
}

#[test]
fn test_buffer_clear() {
    let handler = buffer_handler();
    handler.println("gone");
    handler.clear();
    assert_eq!(handler.get_output(), "");
}

#[test]
fn test_buffer_read_from_another_thread() {
    let handler = buffer_handler();
    handler.println("(def {x} 1)");
    let reader = Arc::clone(&handler);
    let seen = std::thread::spawn(move || reader.get_output())
        .join()
        .unwrap_or_default();
    assert_eq!(seen, "(def {x} 1)\n");
}

#[test]
fn test_silent_drops_lines() {
    let handler = silent_handler();
    handler.println("ignored");
    assert_eq!(handler.get_output(), "");
    assert_eq!(handler.take_output(), "");
}

#[test]
fn test_stdout_captures_nothing() {
    let handler = stdout_handler();
    assert_eq!(handler.get_output(), "");
    assert_eq!(handler.take_output(), "");
}
