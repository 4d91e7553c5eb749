//! Sample catalog loaded by the binary until a persistent store is wired in

use rust_decimal::Decimal;

use hw_core::domain::entities::{Component, ComponentCategory};

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

/// A small but complete catalog: every category, matching and mismatching
/// sockets and memory types, a range of power supplies
pub fn sample_catalog() -> Vec<Component> {
    vec![
        Component::new(ComponentCategory::Cpu, "AMD Ryzen 5 7600", price(19_900))
            .with_spec("Brand", "AMD")
            .with_spec("Socket", "AM5")
            .with_spec("Cores", "6")
            .with_spec("Threads", "12")
            .with_spec("Boost Clock", "5.1 GHz")
            .with_spec("TDP", "65W")
            .with_stock(24),
        Component::new(ComponentCategory::Cpu, "AMD Ryzen 7 7800X3D", price(44_900))
            .with_spec("Brand", "AMD")
            .with_spec("Socket", "AM5")
            .with_spec("Cores", "8")
            .with_spec("Threads", "16")
            .with_spec("TDP", "120W")
            .with_stock(4),
        Component::new(ComponentCategory::Cpu, "Intel Core i5-14600K", price(29_999))
            .with_spec("Manufacturer", "Intel")
            .with_spec("CPU Socket", "LGA1700")
            .with_spec("Cores", "14")
            .with_spec("Power Consumption", "125W")
            .with_stock(11),
        Component::new(ComponentCategory::Motherboard, "MSI MAG B650 Tomahawk", price(21_950))
            .with_spec("Socket", "AM5")
            .with_spec("Chipset", "B650")
            .with_spec("Form Factor", "ATX")
            .with_spec("Memory Support", "DDR5")
            .with_stock(7),
        Component::new(ComponentCategory::Motherboard, "ASUS Prime Z790-P", price(18_990))
            .with_spec("Socket", "LGA1700")
            .with_spec("Chipset", "Z790")
            .with_spec("Form Factor", "ATX")
            .with_spec("Memory Type", "DDR5")
            .with_stock(3),
        Component::new(ComponentCategory::Memory, "Kingston Fury Beast 32GB DDR5-6000", price(10_490))
            .with_spec("RAM Type", "DDR5")
            .with_spec("Capacity", "32GB")
            .with_spec("Speed", "6000 MHz")
            .with_stock(30),
        Component::new(ComponentCategory::Memory, "Corsair Vengeance LPX 16GB DDR4-3200", price(3_990))
            .with_spec("RAM Type", "DDR4")
            .with_spec("Capacity", "16GB")
            .with_spec("Speed", "3200 MHz")
            .with_stock(0),
        Component::new(ComponentCategory::Gpu, "NVIDIA GeForce RTX 4070 Super", price(62_900))
            .with_spec("VRAM", "12GB GDDR6X")
            .with_spec("Boost Clock", "2475 MHz")
            .with_spec("Power Draw", "220W")
            .with_stock(5),
        Component::new(ComponentCategory::Gpu, "AMD Radeon RX 7900 XTX", price(99_900))
            .with_spec("Video Memory", "24GB GDDR6")
            .with_spec("TDP", "355W")
            .with_stock(2),
        Component::new(ComponentCategory::Storage, "Samsung 990 PRO 2TB", price(17_999))
            .with_spec("Capacity", "2TB")
            .with_spec("Interface", "PCIe 4.0 NVMe")
            .with_spec("TDP", "7W")
            .with_stock(18),
        Component::new(ComponentCategory::PowerSupply, "Corsair RM650e", price(8_990))
            .with_spec("Wattage", "650W")
            .with_spec("Efficiency", "80+ Gold")
            .with_stock(9),
        Component::new(ComponentCategory::PowerSupply, "be quiet! Straight Power 12 850W", price(15_490))
            .with_spec("Power Output", "850 W")
            .with_spec("Efficiency", "80+ Platinum")
            .with_stock(6),
        Component::new(ComponentCategory::Case, "Fractal Design North", price(13_900))
            .with_spec("Form Factor", "ATX Mid Tower")
            .with_spec("Colour", "Charcoal")
            .with_stock(8),
        Component::new(ComponentCategory::Cooler, "Noctua NH-D15", price(10_990))
            .with_spec("Socket", "AM5, LGA1700")
            .with_stock(12),
        Component::new(ComponentCategory::Peripheral, "Logitech G Pro X Superlight", price(12_999))
            .with_spec("Interface", "USB / Wireless")
            .with_spec("Color", "Black")
            .with_stock(15),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog_covers_every_category() {
        let catalog = sample_catalog();
        for category in ComponentCategory::ALL {
            assert!(
                catalog.iter().any(|c| c.category == category),
                "no {} in sample catalog",
                category
            );
        }
    }
}
