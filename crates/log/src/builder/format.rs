//! Format layer creation macros

/// Build a text format layer (`pretty` or `compact`) with the display options applied
macro_rules! create_fmt_layer {
    ($format:ident, $display:expr, $writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .$format()
            .with_writer($writer)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
    }};
}

/// Build a JSON format layer (has additional options)
macro_rules! create_json_layer {
    ($display:expr, $writer:expr) => {{
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer($writer)
            .with_current_span(true)
            .with_span_list($display.span_list)
            .flatten_event($display.flatten)
            .with_ansi($display.colors)
            .with_target($display.target)
            .with_file($display.source)
            .with_line_number($display.source)
            .with_thread_ids($display.thread_ids)
    }};
}
