use brewse_api::BeerRecord;

/// One catalog entry as the UI consumes it.
///
/// Identical to [`BeerRecord`] except that `image_url` becomes `image`; the
/// rename marks the boundary between wire format and UI model.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub abv: f64,
    pub ibu: i64,
    pub description: String,
    pub image: String,
}

impl From<BeerRecord> for Item {
    fn from(record: BeerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            abv: record.abv,
            ibu: record.ibu,
            description: record.description,
            image: record.image_url,
        }
    }
}

/// Map raw records into UI items, preserving order.
pub fn transform(records: Vec<BeerRecord>) -> Vec<Item> {
    records.into_iter().map(Item::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u64, name: &str) -> BeerRecord {
        BeerRecord {
            abv: 4.5,
            description: "A test beer".to_string(),
            ibu: 40,
            id,
            image_url: format!("./images/{}.png", id),
            name: name.to_string(),
        }
    }

    #[test]
    fn transform_preserves_length_and_order() {
        let items = transform(vec![record(3, "third"), record(1, "first"), record(2, "second")]);

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].id, 3);
        assert_eq!(items[1].id, 1);
        assert_eq!(items[2].id, 2);
    }

    #[test]
    fn transform_maps_image_url_to_image() {
        let items = transform(vec![record(7, "pale ale")]);

        let item = &items[0];
        assert_eq!(item.name, "pale ale");
        assert_eq!(item.abv, 4.5);
        assert_eq!(item.ibu, 40);
        assert_eq!(item.description, "A test beer");
        assert_eq!(item.image, "./images/7.png");
    }

    #[test]
    fn transform_of_empty_input_is_empty() {
        assert!(transform(Vec::new()).is_empty());
    }
}
