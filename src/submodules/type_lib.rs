pub type NumericData = f64;
