//! Format layer installation macro

/// Applies the shared display options to a fmt layer and installs it with
/// `$filter` as the global subscriber.
///
/// `without_time` changes the layer type, so each branch finishes its own
/// subscriber.
macro_rules! try_init_layer {
    ($filter:expr, $layer:expr, $config:expr) => {{
        let layer = $layer
            .with_writer(std::io::stderr)
            .with_ansi($config.ansi)
            .with_file($config.source)
            .with_line_number($config.source);

        if $config.time {
            Registry::default().with($filter).with(layer).try_init()
        } else {
            Registry::default()
                .with($filter)
                .with(layer.without_time())
                .try_init()
        }
    }};
}
