pub mod u501_classify_products;
pub mod u502_fix_departmentalization;
