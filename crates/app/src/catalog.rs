//! Read-only reference data.
//!
//! The item library merchants pick shelf products from (keyed by store
//! type), and the city/area table the onboarding wizard validates locations
//! against. Never mutated at runtime.

use rust_decimal::Decimal;

/// One entry in the verified item library.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    /// Item name.
    pub name: &'static str,
    /// Suggested unit price in PKR.
    pub price: Decimal,
    /// Category label.
    pub category: &'static str,
    /// Display image.
    pub image_url: &'static str,
}

const fn pkr(amount: u32) -> Decimal {
    Decimal::from_parts(amount, 0, 0, false, 0)
}

macro_rules! item {
    ($name:expr, $price:expr, $category:expr, $image:expr) => {
        CatalogItem {
            name: $name,
            price: pkr($price),
            category: $category,
            image_url: $image,
        }
    };
}

/// The grocery library (the default store type).
static GROCERY: &[CatalogItem] = &[
    // Grains, Flour & Rice
    item!(
        "Wheat Flour Chakki (10kg)",
        1450,
        "Grains, Flour & Rice",
        "https://images.unsplash.com/photo-1509440159596-0249088772ff?w=400"
    ),
    item!(
        "Super Kernel Basmati (5kg)",
        1950,
        "Grains, Flour & Rice",
        "https://images.unsplash.com/photo-1586201375761-83865001e31c?w=400"
    ),
    item!(
        "Brown Rice (1kg)",
        450,
        "Grains, Flour & Rice",
        "https://images.unsplash.com/photo-1536304993881-ff6e9eefa2a6?w=400"
    ),
    item!(
        "Semolina (Suji) 1kg",
        180,
        "Grains, Flour & Rice",
        "https://images.unsplash.com/photo-1505253304499-671c55fb57fe?w=400"
    ),
    item!(
        "Oats (Rolled)",
        550,
        "Grains, Flour & Rice",
        "https://images.unsplash.com/photo-1583115482441-4828560d0144?w=400"
    ),
    // Pulses & Beans
    item!(
        "Daal Moong Washed (1kg)",
        320,
        "Pulses & Beans",
        "https://images.unsplash.com/photo-1585994192627-210134a6258f?w=400"
    ),
    item!(
        "Daal Mash (1kg)",
        450,
        "Pulses & Beans",
        "https://images.unsplash.com/photo-1515942400420-2b98fed1f515?w=400"
    ),
    item!(
        "Red Kidney Beans (1kg)",
        310,
        "Pulses & Beans",
        "https://images.unsplash.com/photo-1551462147-37885abb3e4a?w=400"
    ),
    item!(
        "Chickpeas White (1kg)",
        340,
        "Pulses & Beans",
        "https://images.unsplash.com/photo-1547825407-2d060104b7f8?w=400"
    ),
    // Spices & Masala
    item!(
        "Garam Masala (100g)",
        160,
        "Spices & Masala",
        "https://images.unsplash.com/photo-1532336414038-cf19250c5757?w=400"
    ),
    item!(
        "Biryani Masala (Pack)",
        125,
        "Spices & Masala",
        "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?w=400"
    ),
    item!(
        "Red Chili Powder (200g)",
        220,
        "Spices & Masala",
        "https://images.unsplash.com/photo-1596040033229-a9821ebd058d?w=400"
    ),
    item!(
        "Turmeric Powder (200g)",
        140,
        "Spices & Masala",
        "https://images.unsplash.com/photo-1615485290382-441e4d0c9cb5?w=400"
    ),
    // Cooking Oils & Fats
    item!(
        "Canola Oil (1L)",
        620,
        "Cooking Oils & Fats",
        "https://images.unsplash.com/photo-1474979266404-7eaacbcd87c5?w=400"
    ),
    item!(
        "Desi Ghee (1kg)",
        1950,
        "Cooking Oils & Fats",
        "https://images.unsplash.com/photo-1589985270826-4b7bb135bc9d?w=400"
    ),
    // Dairy & Eggs
    item!(
        "Fresh Milk (1L)",
        290,
        "Dairy & Eggs",
        "https://images.unsplash.com/photo-1563636619-e9107da5a1bb?w=400"
    ),
    item!(
        "Fresh Yogurt (1kg)",
        270,
        "Dairy & Eggs",
        "https://images.unsplash.com/photo-1488477181946-6428a0291777?w=400"
    ),
    item!(
        "Farm Eggs (Dozen)",
        345,
        "Dairy & Eggs",
        "https://images.unsplash.com/photo-1582722872445-44ad5c7864bc?w=400"
    ),
    item!(
        "Mozzarella Cheese (200g)",
        550,
        "Dairy & Eggs",
        "https://images.unsplash.com/photo-1485962391905-dc37bb36024a?w=400"
    ),
    // Bakery & Bread
    item!(
        "White Bread (Large)",
        195,
        "Bakery & Bread",
        "https://images.unsplash.com/photo-1509440159596-0249088772ff?w=400"
    ),
    item!(
        "Cake Rusk (Large)",
        280,
        "Bakery & Bread",
        "https://images.unsplash.com/photo-1558961363-fa8fdf82db35?w=400"
    ),
    // Biscuits & Snacks
    item!(
        "Sooper Biscuits (12 pack)",
        200,
        "Biscuits & Snacks",
        "https://images.unsplash.com/photo-1558961363-fa8fdf82db35?w=400"
    ),
    item!(
        "Nimko Mix (250g)",
        185,
        "Biscuits & Snacks",
        "https://images.unsplash.com/photo-1626074353765-517a681e40be?w=400"
    ),
    item!(
        "Potato Chips Plain",
        130,
        "Biscuits & Snacks",
        "https://images.unsplash.com/photo-1566478989037-eec170784d0b?w=400"
    ),
];

/// The item library for a store type. Unknown types fall back to grocery.
#[must_use]
pub fn library_for(_store_type: &str) -> &'static [CatalogItem] {
    // Only the grocery library ships today; other store types reuse it.
    GROCERY
}

/// Find a library item by exact name for a store type.
#[must_use]
pub fn find_item(store_type: &str, name: &str) -> Option<&'static CatalogItem> {
    library_for(store_type).iter().find(|item| item.name == name)
}

/// Cities and their areas, used to validate onboarding locations.
pub static CITIES: &[(&str, &[&str])] = &[
    ("Karachi", &["Clifton", "DHA", "Gulshan", "Malir"]),
    ("Lahore", &["Gulberg", "DHA", "Johar Town", "Model Town"]),
    ("Islamabad", &["F-6", "F-7", "G-11", "I-8"]),
];

/// The areas for a city, if the city is known.
#[must_use]
pub fn areas_for(city: &str) -> Option<&'static [&'static str]> {
    CITIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(city))
        .map(|(_, areas)| *areas)
}
