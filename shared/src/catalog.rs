//! Built-in biological product catalog
//!
//! Stands in for a product database. Deployments can replace it with a JSON
//! catalog file, which must pass [`crate::validation::validate_catalog`].

use crate::models::{Product, ProductType, ALL_CROPS};

struct CatalogEntry {
    id: u32,
    name: &'static str,
    product_type: ProductType,
    efficacy: f64,
    compatibility: &'static [&'static str],
    application_timing: &'static str,
    benefits: &'static [&'static str],
    description: &'static str,
    price: &'static str,
    composition: &'static str,
    application_rate: &'static str,
    safety_period: &'static str,
    storage_conditions: &'static str,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: 1,
        name: "BioDefend Plus",
        product_type: ProductType::PestControl,
        efficacy: 95.0,
        compatibility: &["Cotton", "Chickpea"],
        application_timing: "Apply during early flowering stage",
        benefits: &[
            "Targets aphids specifically",
            "Safe for pollinators",
            "Residual protection for up to 14 days",
        ],
        description: "A natural biological pesticide that targets aphids and other common cotton pests without harming beneficial insects.",
        price: "₹1,200 per liter",
        composition: "Bacillus thuringiensis strain HD-1 (10%), Natural plant extracts (5%), Inert ingredients (85%)",
        application_rate: "1.5 L/ha",
        safety_period: "3 days",
        storage_conditions: "Store in a cool, dry place away from direct sunlight",
    },
    CatalogEntry {
        id: 2,
        name: "MildewGuard Bio",
        product_type: ProductType::DiseaseControl,
        efficacy: 85.0,
        compatibility: &["Cotton", "Chickpea", "Wheat"],
        application_timing: "Apply at first signs of disease or as preventative",
        benefits: &[
            "Prevents and treats powdery mildew",
            "Strengthens plant immune system",
            "Rainfast within 1 hour",
        ],
        description: "A biological fungicide that prevents and treats powdery mildew in a variety of crops.",
        price: "₹950 per kg",
        composition: "Bacillus subtilis strain QST 713 (5%), Trichoderma harzianum (3%), Inert ingredients (92%)",
        application_rate: "1 kg/ha",
        safety_period: "1 day",
        storage_conditions: "Store in a cool, dry place below 25°C",
    },
    CatalogEntry {
        id: 3,
        name: "SoilVital Pro",
        product_type: ProductType::SoilHealth,
        efficacy: 80.0,
        compatibility: &[ALL_CROPS],
        application_timing: "Apply during field preparation or early growth stages",
        benefits: &[
            "Increases nitrogen fixation",
            "Improves nutrient uptake",
            "Enhances soil structure",
        ],
        description: "A consortium of beneficial microorganisms that improve soil structure, nutrient availability, and plant root development.",
        price: "₹850 per kg",
        composition: "Azotobacter chroococcum (2%), Bacillus megaterium (2%), Pseudomonas fluorescens (1%), Organic carrier (95%)",
        application_rate: "2 kg/ha",
        safety_period: "None",
        storage_conditions: "Store in a cool, dry place away from direct sunlight",
    },
    CatalogEntry {
        id: 4,
        name: "BioRoot Stimulator",
        product_type: ProductType::GrowthPromoter,
        efficacy: 75.0,
        compatibility: &[ALL_CROPS],
        application_timing: "Apply during early vegetative growth",
        benefits: &[
            "Promotes root development",
            "Increases drought tolerance",
            "Enhances nutrient uptake",
        ],
        description: "A biological root stimulator that enhances root development and nutrient uptake.",
        price: "₹1,100 per liter",
        composition: "Seaweed extract (10%), Humic acids (5%), Amino acids (3%), Inert ingredients (82%)",
        application_rate: "1 L/ha",
        safety_period: "None",
        storage_conditions: "Store in a cool, dry place between 5-30°C",
    },
    CatalogEntry {
        id: 5,
        name: "NemControl Bio",
        product_type: ProductType::PestControl,
        efficacy: 80.0,
        compatibility: &["Cotton", "Vegetables"],
        application_timing: "Apply during field preparation or early growth stages",
        benefits: &[
            "Controls nematodes naturally",
            "Improves root health",
            "Long-lasting protection",
        ],
        description: "A biological nematicide that controls root-knot nematodes and other soil-borne pests.",
        price: "₹1,350 per kg",
        composition: "Paecilomyces lilacinus (2%), Pochonia chlamydosporia (1%), Organic carrier (97%)",
        application_rate: "2.5 kg/ha",
        safety_period: "None",
        storage_conditions: "Store in a cool, dry place below 25°C",
    },
    CatalogEntry {
        id: 6,
        name: "BlightShield Organic",
        product_type: ProductType::DiseaseControl,
        efficacy: 80.0,
        compatibility: &["Cotton", "Vegetables"],
        application_timing: "Apply preventatively or at first signs of disease",
        benefits: &[
            "Controls multiple types of blight",
            "Improves plant vigor",
            "Eco-friendly formulation",
        ],
        description: "A biological fungicide that protects against early and late blight in crops.",
        price: "₹1,050 per liter",
        composition: "Bacillus amyloliquefaciens strain D747 (5%), Plant extracts (3%), Inert ingredients (92%)",
        application_rate: "1.5 L/ha",
        safety_period: "1 day",
        storage_conditions: "Store in a cool, dry place away from direct sunlight",
    },
];

impl CatalogEntry {
    fn to_product(&self) -> Product {
        let strings = |items: &[&str]| -> Vec<String> { items.iter().map(|s| s.to_string()).collect() };
        Product {
            id: self.id,
            name: self.name.to_string(),
            product_type: self.product_type,
            efficacy: self.efficacy,
            compatibility: strings(self.compatibility),
            application_timing: self.application_timing.to_string(),
            benefits: strings(self.benefits),
            description: Some(self.description.to_string()),
            price: Some(self.price.to_string()),
            composition: Some(self.composition.to_string()),
            application_rate: Some(self.application_rate.to_string()),
            safety_period: Some(self.safety_period.to_string()),
            storage_conditions: Some(self.storage_conditions.to_string()),
        }
    }
}

/// The six products shipped with the advisor, in catalog order
pub fn builtin_products() -> Vec<Product> {
    CATALOG.iter().map(CatalogEntry::to_product).collect()
}

/// Criteria for narrowing a catalog; unset criteria match everything
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductFilter {
    pub product_type: Option<ProductType>,
    pub min_efficacy: Option<f64>,
    /// Keep only products compatible with this crop type
    pub crop: Option<String>,
}

impl ProductFilter {
    pub fn matches(&self, product: &Product) -> bool {
        self.product_type.map_or(true, |t| product.product_type == t)
            && self.min_efficacy.map_or(true, |min| product.efficacy >= min)
            && self
                .crop
                .as_deref()
                .map_or(true, |crop| product.is_compatible_with(crop))
    }
}

/// Products matching `filter`, in catalog order
pub fn filter_products(products: &[Product], filter: &ProductFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|p| filter.matches(p))
        .cloned()
        .collect()
}
