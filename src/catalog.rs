use crate::codec::Codec;
use crate::error::CatalogError;
use crate::persist;
use crate::product::{Product, ProductFields, SortKey};
use log::{debug, info, warn};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

pub type Result<T> = std::result::Result<T, CatalogError>;

/// An ordered list of products mirrored to one file.
///
/// Every mutating call rewrites the whole file. The store assumes it is the
/// only writer; two processes sharing a file can hand out the same id and the
/// later write wins. A changed file is only detected and logged, never merged.
pub struct ProductStore {
    path: PathBuf,
    codec: Box<dyn Codec>,
    products: Vec<Product>,
    fingerprint: Option<String>,
}

impl ProductStore {
    /// Loads the catalog at `path`. A missing, empty or undecodable file gives
    /// an empty catalog.
    pub fn open(path: impl Into<PathBuf>, codec: Box<dyn Codec>) -> Result<Self> {
        let path = path.into();
        debug!("Opening catalog {} ({})", path.display(), codec.name());

        let bytes = persist::read(&path).map_err(|source| CatalogError::Read {
            path: path.clone(),
            source,
        })?;

        let (products, fingerprint) = match bytes {
            None => {
                info!("Catalog {} does not exist, starting empty", path.display());
                (Vec::new(), None)
            }
            Some(bytes) => {
                let fingerprint = Some(persist::fingerprint(&bytes));
                (decode_products(codec.as_ref(), &path, &bytes), fingerprint)
            }
        };

        info!("Loaded {} products from {}", products.len(), path.display());

        Ok(Self {
            path,
            codec,
            products,
            fingerprint,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, product_id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == product_id)
    }

    pub fn contains(&self, product_id: u64) -> bool {
        self.get(product_id).is_some()
    }

    /// One past the highest id in the catalog. Ids freed by `remove` are not
    /// remembered, so removing the highest record makes its id available again.
    pub fn next_id(&self) -> Result<u64> {
        match self.products.iter().map(|p| p.product_id).max() {
            None => Ok(1),
            Some(max) => max.checked_add(1).ok_or(CatalogError::IdExhausted),
        }
    }

    pub fn add(&mut self, fields: ProductFields) -> Result<Product> {
        validate(&fields)?;
        let product = Product::new(self.next_id()?, fields);

        self.products.push(product.clone());
        debug!("Added product {} '{}'", product.product_id, product.name);
        self.save()?;

        Ok(product)
    }

    /// Returns whether a product was removed. The catalog is saved either way.
    pub fn remove(&mut self, product_id: u64) -> Result<bool> {
        let before = self.products.len();
        self.products.retain(|p| p.product_id != product_id);
        let removed = self.products.len() != before;

        if removed {
            debug!("Removed product {}", product_id);
        } else {
            debug!("No product {} to remove", product_id);
        }
        self.save()?;

        Ok(removed)
    }

    /// Replaces all four fields of the matching product. Returns whether one
    /// matched. The catalog is saved either way.
    pub fn update(&mut self, product_id: u64, fields: ProductFields) -> Result<bool> {
        validate(&fields)?;

        let updated = match self.products.iter_mut().find(|p| p.product_id == product_id) {
            Some(product) => {
                product.apply(fields);
                debug!("Updated product {}", product_id);
                true
            }
            None => {
                debug!("No product {} to update", product_id);
                false
            }
        };
        self.save()?;

        Ok(updated)
    }

    /// Stable, ascending, in memory only. Call `save` to persist the order.
    pub fn sort(&mut self, key: SortKey) {
        self.products.sort_by(|a, b| key.compare(a, b));
        debug!("Sorted {} products by {}", self.products.len(), key);
    }

    pub fn search(&self, query: &str) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| p.matches(query))
            .cloned()
            .collect()
    }

    /// Rewrites the file from the in-memory catalog. After a failed save the
    /// in-memory state is still valid and calling this again retries.
    pub fn save(&mut self) -> Result<()> {
        let content = self.codec.encode(&self.products)?;
        if self.changed_on_disk() {
            warn!(
                "Catalog {} changed on disk since it was loaded, overwriting",
                self.path.display()
            );
        }

        persist::write_atomic(&self.path, &content).map_err(|source| CatalogError::Persist {
            path: self.path.clone(),
            source,
        })?;

        self.fingerprint = Some(persist::fingerprint(&content));
        debug!(
            "Wrote {} products to {}",
            self.products.len(),
            self.path.display()
        );
        Ok(())
    }

    pub fn close(self) {
        debug!("Closing catalog {}", self.path.display());
    }

    /// True when the file exists and no longer holds what this store last
    /// read or wrote.
    fn changed_on_disk(&self) -> bool {
        match persist::read(&self.path) {
            Ok(Some(bytes)) => Some(persist::fingerprint(&bytes)) != self.fingerprint,
            Ok(None) | Err(_) => false,
        }
    }
}

fn decode_products(codec: &dyn Codec, path: &Path, bytes: &[u8]) -> Vec<Product> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        info!("Catalog {} is empty", path.display());
        return Vec::new();
    }

    let products = match codec.decode(bytes) {
        Ok(products) => products,
        Err(e) => {
            warn!("Ignoring malformed catalog {}: {}", path.display(), e);
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    if let Some(dup) = products.iter().find(|p| !seen.insert(p.product_id)) {
        warn!(
            "Ignoring malformed catalog {}: duplicate product id {}",
            path.display(),
            dup.product_id
        );
        return Vec::new();
    }

    products
}

fn validate(fields: &ProductFields) -> Result<()> {
    if !fields.price.is_finite() {
        return Err(CatalogError::InvalidArgument {
            field: "price",
            reason: format!("{} is not a finite number", fields.price),
        });
    }
    Ok(())
}
