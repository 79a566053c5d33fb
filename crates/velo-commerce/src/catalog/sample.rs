//! The built-in storefront catalog.

use super::{Catalog, Category, Product};
use crate::money::Money;

const HELMET_IMAGE: &str = "https://images.unsplash.com/photo-1557803175-2f8c4c0c5f0a?w=800";
const GEAR_IMAGE: &str = "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=800";
const PARTS_IMAGE: &str = "https://images.unsplash.com/photo-1558171813-4c088753af8f?w=800";

fn categories() -> Vec<Category> {
    vec![
        Category::new("helmets", "Helmets", "🪖", 24),
        Category::new("lights", "Lights", "💡", 18),
        Category::new("gloves", "Gloves", "🧤", 15),
        Category::new("tools", "Tools", "🔧", 32),
        Category::new("spare-parts", "Spare Parts", "⚙️", 45),
        Category::new("bags", "Bags", "🎒", 12),
    ]
}

fn products() -> Vec<Product> {
    vec![
        Product::new("1", "Aero Pro Carbon Helmet", Money::from_cents(24999), "helmets")
            .with_original_price(Money::from_cents(29999))
            .with_image(HELMET_IMAGE)
            .with_brand("VeloTech")
            .with_rating(4.8, 124)
            .with_description(
                "Ultra-lightweight carbon fiber helmet with advanced aerodynamics and MIPS technology for maximum protection.",
            )
            .with_specification("Weight", "245g")
            .with_specification("Material", "Carbon Fiber")
            .with_specification("Ventilation", "18 vents")
            .with_specification("Safety", "MIPS Technology")
            .with_specification("Sizes", "S, M, L, XL")
            .bestseller(),
        Product::new("2", "NightRider Pro 1200", Money::from_cents(12999), "lights")
            .with_image(GEAR_IMAGE)
            .with_brand("LumiCycle")
            .with_rating(4.9, 89)
            .with_description("1200 lumen front light with smart beam technology and 8-hour battery life.")
            .with_specification("Lumens", "1200")
            .with_specification("Battery", "8 hours")
            .with_specification("Modes", "5 lighting modes")
            .with_specification("Waterproof", "IPX6")
            .with_specification("Mount", "Quick release")
            .new_arrival(),
        Product::new("3", "GripMaster Pro Gloves", Money::from_cents(5999), "gloves")
            .with_original_price(Money::from_cents(7999))
            .with_image(PARTS_IMAGE)
            .with_brand("RidePro")
            .with_rating(4.7, 156)
            .with_description("Premium cycling gloves with gel padding and touchscreen-compatible fingertips.")
            .with_specification("Material", "Synthetic leather")
            .with_specification("Padding", "4mm gel")
            .with_specification("Touchscreen", "Yes")
            .with_specification("Breathable", "Mesh back")
            .with_specification("Sizes", "XS-XXL")
            .bestseller(),
        Product::new("4", "Multi-Tool Pro 19", Money::from_cents(4499), "tools")
            .with_image(GEAR_IMAGE)
            .with_brand("CycleFix")
            .with_rating(4.6, 203)
            .with_description("Compact 19-function multi-tool with chain breaker and tire levers.")
            .with_specification("Functions", "19")
            .with_specification("Weight", "175g")
            .with_specification("Material", "Chrome Vanadium Steel")
            .with_specification("Chain Breaker", "Included")
            .with_specification("Warranty", "10 years"),
        Product::new("5", "Carbon Fiber Bottle Cage", Money::from_cents(3499), "spare-parts")
            .with_image(PARTS_IMAGE)
            .with_brand("VeloTech")
            .with_rating(4.5, 78)
            .with_description("Ultra-lightweight carbon fiber bottle cage with secure grip.")
            .with_specification("Weight", "18g")
            .with_specification("Material", "Carbon Fiber")
            .with_specification("Compatibility", "Standard bottles")
            .with_specification("Color", "Matte Black")
            .with_specification("Mounting", "Standard bolts"),
        Product::new("6", "Waterproof Saddle Bag", Money::from_cents(4999), "bags")
            .with_original_price(Money::from_cents(6499))
            .with_image(GEAR_IMAGE)
            .with_brand("RidePro")
            .with_rating(4.8, 112)
            .with_description("Roll-top waterproof saddle bag with 1.5L capacity.")
            .with_specification("Capacity", "1.5L")
            .with_specification("Waterproof", "IPX7")
            .with_specification("Material", "TPU coated nylon")
            .with_specification("Mount", "Velcro straps")
            .with_specification("Reflective", "Yes")
            .new_arrival(),
        Product::new("7", "Urban Commuter Helmet", Money::from_cents(14999), "helmets")
            .with_image(HELMET_IMAGE)
            .with_brand("CityRide")
            .with_rating(4.6, 67)
            .with_description("Stylish urban helmet with integrated LED lights and removable visor.")
            .with_specification("Weight", "310g")
            .with_specification("Material", "In-mold polycarbonate")
            .with_specification("LED", "Integrated rear light")
            .with_specification("Visor", "Removable")
            .with_specification("Sizes", "M, L"),
        Product::new("8", "Ceramic Brake Pads Set", Money::from_cents(2999), "spare-parts")
            .with_image(PARTS_IMAGE)
            .with_brand("StopTech")
            .with_rating(4.7, 189)
            .with_description("High-performance ceramic brake pads for disc brakes.")
            .with_specification("Type", "Ceramic compound")
            .with_specification("Compatibility", "Shimano/SRAM")
            .with_specification("Weather", "All conditions")
            .with_specification("Noise", "Low noise")
            .with_specification("Set", "2 pairs")
            .bestseller(),
    ]
}

/// Build the sample catalog.
///
/// The data is fixed and satisfies every catalog invariant, so validation
/// is skipped here; `test_sample_catalog_is_valid` guards that.
pub(super) fn sample_catalog() -> Catalog {
    Catalog {
        categories: categories(),
        products: products(),
    }
}
