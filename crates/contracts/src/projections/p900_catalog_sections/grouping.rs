use crate::domain::a002_product::aggregate::Product;
use std::collections::HashMap;

/// Products partitioned by category.
///
/// Categories keep the order in which they were first seen, and products
/// keep their order within a category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogGroups {
    groups: Vec<(String, Vec<Product>)>,
}

impl CatalogGroups {
    /// Distinct category names, first-seen order
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(c, _)| c.as_str())
    }

    pub fn products(&self, category: &str) -> Option<&[Product]> {
        self.groups
            .iter()
            .find(|(c, _)| c == category)
            .map(|(_, p)| p.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Product])> {
        self.groups.iter().map(|(c, p)| (c.as_str(), p.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

pub fn group_by_category<I>(products: I) -> CatalogGroups
where
    I: IntoIterator<Item = Product>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<Product>)> = Vec::new();

    for product in products {
        match index.get(&product.category) {
            Some(&i) => groups[i].1.push(product),
            None => {
                index.insert(product.category.clone(), groups.len());
                groups.push((product.category.clone(), vec![product]));
            }
        }
    }

    CatalogGroups { groups }
}
