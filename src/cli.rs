use crate::product::{ProductFields, SortKey};
use bpaf::{any, construct, literal, long, Bpaf, Parser};
use std::path::PathBuf;

#[derive(Debug, Clone, Bpaf)]
#[bpaf(options, version)]
pub struct Args {
    /// Path to config file
    #[bpaf(short, long, fallback(PathBuf::from("catalog.yaml")))]
    pub config: PathBuf,

    /// Catalog file, overrides the configured location
    #[bpaf(short, long, argument("PATH"))]
    pub file: Option<PathBuf>,

    #[bpaf(external)]
    pub command: Command,
}

#[derive(Debug, Clone, Bpaf)]
pub struct FieldArgs {
    /// Product name
    #[bpaf(long, argument("NAME"))]
    pub name: String,

    /// Unit price
    #[bpaf(long, argument("PRICE"))]
    pub price: f64,

    /// Free-form description
    #[bpaf(long, argument("TEXT"), fallback(String::new()))]
    pub description: String,

    #[bpaf(external(quantity))]
    pub quantity: i64,
}

/// `--quantity -3` would otherwise read `-3` as a flag, so the value after
/// the tag is taken as-is. `--quantity=-3` goes through the plain argument.
fn quantity() -> impl Parser<i64> {
    let tag = literal("--quantity").help("Quantity in stock, may be negative");
    let value = any::<i64, _, _>("QTY", Some);
    let spaced = construct!(tag, value).adjacent().map(|(_, qty)| qty);
    let joined = long("quantity").argument::<i64>("QTY").hide();
    construct!([spaced, joined])
}

impl From<FieldArgs> for ProductFields {
    fn from(args: FieldArgs) -> Self {
        Self {
            name: args.name,
            price: args.price,
            description: args.description,
            quantity: args.quantity,
        }
    }
}

#[derive(Debug, Clone, Bpaf)]
pub enum Command {
    /// Add a product
    #[bpaf(command)]
    Add {
        #[bpaf(external(field_args))]
        fields: FieldArgs,
    },

    /// Remove a product by id
    #[bpaf(command)]
    Remove {
        #[bpaf(positional("ID"))]
        id: u64,
    },

    /// Replace every field of a product
    #[bpaf(command)]
    Update {
        #[bpaf(external(field_args))]
        fields: FieldArgs,

        #[bpaf(positional("ID"))]
        id: u64,
    },

    /// Show products sorted by price or name
    #[bpaf(command)]
    Sort {
        /// Field to sort by: price or name
        #[bpaf(long("by"), argument("FIELD"))]
        by: SortKey,

        /// Write the sorted order back to the catalog
        #[bpaf(long)]
        save: bool,
    },

    /// Find products by id or name
    #[bpaf(command)]
    Search {
        #[bpaf(positional("QUERY"))]
        query: String,
    },

    /// List all products
    #[bpaf(command)]
    List,

    /// Interactive menu
    #[bpaf(command)]
    Menu,
}

pub fn parse() -> Args {
    args().run()
}
