use chaos_trails::prelude::*;

fn main() {
    let result = Viewer::new()
        .with_window_size(1280, 720)
        .with_coefficients(Coefficients {
            rho: 32.0,
            ..Default::default()
        })
        .with_sweep(HueSweep::FULL)
        .run();

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
