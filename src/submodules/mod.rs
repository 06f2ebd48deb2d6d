pub mod figure;
pub mod input_params;
pub mod reference_table;
pub mod result_table;
pub mod type_lib;
