pub mod a003_product;
