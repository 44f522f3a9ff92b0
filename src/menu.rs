use crate::catalog::ProductStore;
use crate::display;
use crate::product::{ProductFields, SortKey};
use anyhow::Result;
use colored::Colorize;
use std::fmt::Display;
use std::io::{BufRead, Write};
use std::str::FromStr;

enum Step {
    Continue,
    Quit,
}

/// Interactive text menu over a `ProductStore`.
///
/// All prompting and input parsing happens here; the store only ever sees
/// parsed values. End of input behaves like choosing exit.
pub struct Menu<'a, R, W> {
    store: &'a mut ProductStore,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(store: &'a mut ProductStore, input: R, output: W) -> Self {
        Self {
            store,
            input,
            output,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_options()?;

            let Some(choice) = self.prompt("Enter your choice: ")? else {
                return Ok(());
            };

            let step = match choice.trim() {
                "1" => self.add()?,
                "2" => self.remove()?,
                "3" => self.update()?,
                "4" => self.sort()?,
                "5" => self.search()?,
                "6" | "q" => Step::Quit,
                "7" => self.list()?,
                _ => {
                    writeln!(self.output, "{}", "Invalid choice. Please try again.".red())?;
                    Step::Continue
                }
            };

            if let Step::Quit = step {
                return Ok(());
            }
        }
    }

    fn show_options(&mut self) -> Result<()> {
        writeln!(self.output, "\n{}", "Product Manager Menu:".bold())?;
        writeln!(self.output, "------------------------")?;
        writeln!(self.output, "1. Add product")?;
        writeln!(self.output, "2. Remove product")?;
        writeln!(self.output, "3. Update product")?;
        writeln!(self.output, "4. Sort products by price or name")?;
        writeln!(self.output, "5. Search for a product")?;
        writeln!(self.output, "6. Exit")?;
        writeln!(self.output, "7. List products")?;
        Ok(())
    }

    fn add(&mut self) -> Result<Step> {
        let Some(fields) = self.prompt_fields("")? else {
            return Ok(Step::Quit);
        };

        let product = self.store.add(fields)?;
        writeln!(
            self.output,
            "{}",
            format!("Product #{} added.", product.product_id).green()
        )?;
        Ok(Step::Continue)
    }

    fn remove(&mut self) -> Result<Step> {
        let Some(id) = self.prompt_existing_id("Enter the product ID to remove: ")? else {
            return Ok(Step::Quit);
        };

        if let Some(id) = id {
            self.store.remove(id)?;
            writeln!(self.output, "{}", "Product removed.".green())?;
        }
        Ok(Step::Continue)
    }

    fn update(&mut self) -> Result<Step> {
        let Some(id) = self.prompt_existing_id("Enter the product ID to update: ")? else {
            return Ok(Step::Quit);
        };
        let Some(id) = id else {
            return Ok(Step::Continue);
        };

        let Some(fields) = self.prompt_fields("new ")? else {
            return Ok(Step::Quit);
        };

        self.store.update(id, fields)?;
        writeln!(self.output, "{}", "Product updated.".green())?;
        Ok(Step::Continue)
    }

    fn sort(&mut self) -> Result<Step> {
        let Some(answer) = self.prompt("Do you want to sort by price (p) or name (n)? ")? else {
            return Ok(Step::Quit);
        };

        match answer.parse::<SortKey>() {
            Ok(key) => {
                self.store.sort(key);
                writeln!(self.output, "Products sorted by {}.", key)?;
                display::write_products(&mut self.output, self.store.products())?;
            }
            Err(_) => {
                writeln!(self.output, "{}", "Unknown sort option, order unchanged.".yellow())?;
            }
        }
        Ok(Step::Continue)
    }

    fn search(&mut self) -> Result<Step> {
        let Some(query) = self.prompt("Enter the product ID or name to search: ")? else {
            return Ok(Step::Quit);
        };

        let found = self.store.search(query.trim());
        if found.is_empty() {
            writeln!(self.output, "No matching products found.")?;
        } else {
            display::write_products(&mut self.output, &found)?;
        }
        Ok(Step::Continue)
    }

    fn list(&mut self) -> Result<Step> {
        display::write_products(&mut self.output, self.store.products())?;
        Ok(Step::Continue)
    }

    /// Outer `None` is end of input, inner `None` is an unknown id.
    fn prompt_existing_id(&mut self, message: &str) -> Result<Option<Option<u64>>> {
        let Some(id) = self.prompt_parsed::<u64>(message)? else {
            return Ok(None);
        };

        if self.store.contains(id) {
            Ok(Some(Some(id)))
        } else {
            writeln!(self.output, "{}", "Product ID not found.".red())?;
            Ok(Some(None))
        }
    }

    fn prompt_fields(&mut self, qualifier: &str) -> Result<Option<ProductFields>> {
        let Some(name) = self.prompt(&format!("Enter the {}product name: ", qualifier))? else {
            return Ok(None);
        };
        let Some(price) = self.prompt_price(&format!("Enter the {}product price: ", qualifier))?
        else {
            return Ok(None);
        };
        let Some(description) =
            self.prompt(&format!("Enter the {}product description: ", qualifier))?
        else {
            return Ok(None);
        };
        let Some(quantity) =
            self.prompt_parsed::<i64>(&format!("Enter the {}product quantity: ", qualifier))?
        else {
            return Ok(None);
        };

        Ok(Some(ProductFields {
            name,
            price,
            description,
            quantity,
        }))
    }

    fn prompt_price(&mut self, message: &str) -> Result<Option<f64>> {
        loop {
            let Some(price) = self.prompt_parsed::<f64>(message)? else {
                return Ok(None);
            };
            if price.is_finite() {
                return Ok(Some(price));
            }
            writeln!(self.output, "{}", "Price must be a finite number.".red())?;
        }
    }

    fn prompt_parsed<T>(&mut self, message: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: Display,
    {
        loop {
            let Some(line) = self.prompt(message)? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(value) => return Ok(Some(value)),
                Err(e) => writeln!(self.output, "{}", format!("Invalid input: {}", e).red())?,
            }
        }
    }

    fn prompt(&mut self, message: &str) -> Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
