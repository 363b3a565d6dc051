pub mod p900_sales_by_channel;
