use crate::product::Product;
use colored::Colorize;
use std::io::{self, Write};

pub fn write_products(out: &mut dyn Write, products: &[Product]) -> io::Result<()> {
    if products.is_empty() {
        writeln!(out, "  {}", "(no products)".dimmed())?;
        return Ok(());
    }

    for product in products {
        write_product(out, product)?;
    }
    writeln!(out, "\n{} product(s)", products.len())
}

pub fn write_product(out: &mut dyn Write, product: &Product) -> io::Result<()> {
    let id = format!("#{}", product.product_id);
    writeln!(
        out,
        "  [{}] {}  {}  qty {}",
        id.blue(),
        product.name.bold(),
        format!("{:.2}", product.price).green(),
        product.quantity
    )?;
    if !product.description.is_empty() {
        writeln!(out, "        {}", product.description.dimmed())?;
    }
    Ok(())
}
