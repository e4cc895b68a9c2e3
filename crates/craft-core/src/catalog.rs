//! Product catalog and category filtering for the storefront grid.

/// Product category, one per filter button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    Pottery,
    Woodwork,
    Jewelry,
    Textiles,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Pottery,
        Category::Woodwork,
        Category::Jewelry,
        Category::Textiles,
    ];

    /// Stable identifier used in `data-filter` attributes and card classes.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Pottery => "pottery",
            Category::Woodwork => "woodwork",
            Category::Jewelry => "jewelry",
            Category::Textiles => "textiles",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.slug() == slug)
    }
}

/// Filter selection driven by the category buttons.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(Category),
}

impl Filter {
    /// Parse a `data-filter` value; anything unknown falls back to `All`.
    pub fn from_slug(slug: &str) -> Filter {
        match slug {
            "all" => Filter::All,
            s => Category::from_slug(s)
                .map(Filter::Category)
                .unwrap_or(Filter::All),
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(c) => product.category == *c,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Product {
    pub name: &'static str,
    pub price_rupees: u32,
    pub description: &'static str,
    pub category: Category,
}

impl Product {
    /// Price label with thousands separators, e.g. "Rs. 1,250".
    pub fn price_label(&self) -> String {
        let digits = self.price_rupees.to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }
        format!("Rs. {grouped}")
    }
}

/// The storefront's inventory.
pub const PRODUCTS: [Product; 6] = [
    Product {
        name: "Traditional Clay Pot",
        price_rupees: 1250,
        description: "Hand-crafted from local clay with traditional patterns",
        category: Category::Pottery,
    },
    Product {
        name: "Wooden Elephant Carving",
        price_rupees: 3500,
        description: "Intricately carved teak elephant figure",
        category: Category::Woodwork,
    },
    Product {
        name: "Beaded Necklace Set",
        price_rupees: 1890,
        description: "Handmade with colorful glass beads and silver accents",
        category: Category::Jewelry,
    },
    Product {
        name: "Handloom Table Runner",
        price_rupees: 2450,
        description: "Cotton table runner with traditional Sri Lankan patterns",
        category: Category::Textiles,
    },
    Product {
        name: "Terracotta Oil Lamp",
        price_rupees: 890,
        description: "Traditional oil lamp for festivals and home decoration",
        category: Category::Pottery,
    },
    Product {
        name: "Coconut Shell Craft Box",
        price_rupees: 1750,
        description: "Beautiful utility box made from polished coconut shell",
        category: Category::Woodwork,
    },
];
