//! Swap prediction strategies, both as types and as plain functions.

use lecture_core::strategy::{last_value, mean, LastValue, MeanValue, PredictError, Predictor};

fn main() -> Result<(), PredictError> {
    let my_values = [1.0, 2.0, 3.0];

    let mut p = Predictor::default();
    println!("Default prediction: {}", p.predict(&my_values)?);

    p.set_strategy(Box::new(LastValue));
    println!("Last value prediction: {}", p.predict(&my_values)?);

    p.set_strategy(Box::new(MeanValue));
    println!("Mean value prediction: {}", p.predict(&my_values)?);

    println!("\n=== Function strategies ===");
    let mut p = Predictor::new(Box::new(mean));
    println!("Default prediction: {}", p.predict(&my_values)?);

    p.set_strategy(Box::new(last_value));
    println!("Last value prediction: {}", p.predict(&my_values)?);

    p.set_strategy(Box::new(|values: &[f64]| -> Result<f64, PredictError> {
        Ok(values.iter().copied().fold(f64::MIN, f64::max))
    }));
    println!("Maximum prediction: {}", p.predict(&my_values)?);

    Ok(())
}
