pub mod product_controller;
