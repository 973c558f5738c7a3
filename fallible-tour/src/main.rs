use std::cell::Cell;

use fallible::{
    divide, divide_with_completion, from_completion, inspect, map, swap, swap_cells,
    DivisionFailure, FailureKind, Tag, TypedResult,
};
use tap::TapFallible as _;
use tracing::{info, info_span, warn, Instrument};

#[tokio::main]
async fn main() {
    if let Err(error) = fallible::init_tracing() {
        eprintln!("failed to install tracing subscriber: {error}");
    }

    info!("starting tour");

    swaps();

    for (x, y) in [(10, 5), (10, 0), (-7, 2)] {
        let _guard = info_span!("divide", x, y).entered();
        report(divide(x, y));
    }

    let _ = map(divide(10, 5), |quotient| quotient * 10)
        .tap_ok(|scaled| info!(%scaled, "mapped quotient"))
        .tap_err(|failure| warn!(%failure, "nothing to map"));

    let _ = map(divide(10, 0), |quotient| quotient * 10)
        .tap_ok(|scaled| info!(%scaled, "mapped quotient"))
        .tap_err(|failure| warn!(%failure, "nothing to map"));

    async {
        let result = from_completion(|completion| {
            divide_with_completion(10, 0, move |result| completion.complete(result));
        })
        .await;
        report(result);
    }
    .instrument(info_span!("completion"))
    .await;

    info!("finished tour; see you soon!");
}

fn swaps() {
    let (mut left, mut right) = ("left", "right");
    swap(&mut left, &mut right);
    info!(left, right, "swapped bindings");

    let cell = Cell::new(42);
    swap_cells(&cell, &cell);
    info!(value = cell.get(), "swapped a cell with itself");
}

fn report(result: TypedResult<i64, DivisionFailure>) {
    match inspect(&result) {
        Tag::Success => info!("operation succeeded"),
        Tag::Failure => warn!("operation failed"),
    }

    match result {
        Ok(quotient) => info!(%quotient, "quotient"),
        Err(failure) => warn!(description = failure.message(), "division failed"),
    }
}
