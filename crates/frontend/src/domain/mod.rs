pub mod a025_receipt;
