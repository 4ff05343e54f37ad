//! 재료 물성 표. SI/영국 단위 값을 함께 갖고 검색과 단위계별 표시를 제공한다.

use serde::{Deserialize, Serialize};

/// 물성 표시 단위계.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    #[serde(rename = "SI")]
    Si,
    #[serde(rename = "IMP")]
    Imperial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaterialCategory {
    Metal,
    Plastic,
    Other,
}

/// 단위계별로 따로 둔 물성값.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualValue {
    pub si: f64,
    pub imp: f64,
}

impl DualValue {
    pub fn get(&self, system: UnitSystem) -> f64 {
        match system {
            UnitSystem::Si => self.si,
            UnitSystem::Imperial => self.imp,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialProperty {
    pub name: &'static str,
    /// kg/m³ | lb/ft³
    pub density: DualValue,
    /// GPa | Mpsi
    pub modulus: DualValue,
    /// µm/m-°C | µin/in-°F
    pub expansion: DualValue,
    pub category: MaterialCategory,
}

impl MaterialProperty {
    pub fn density_label(&self, system: UnitSystem) -> String {
        let unit = match system {
            UnitSystem::Si => "kg/m³",
            UnitSystem::Imperial => "lb/ft³",
        };
        format!("{} {unit}", self.density.get(system))
    }

    pub fn modulus_label(&self, system: UnitSystem) -> String {
        let unit = match system {
            UnitSystem::Si => "GPa",
            UnitSystem::Imperial => "Mpsi",
        };
        format!("{} {unit}", self.modulus.get(system))
    }

    pub fn expansion_label(&self, system: UnitSystem) -> String {
        let unit = match system {
            UnitSystem::Si => "µm/m-C",
            UnitSystem::Imperial => "µin/in-F",
        };
        format!("{} {unit}", self.expansion.get(system))
    }
}

const fn dv(si: f64, imp: f64) -> DualValue {
    DualValue { si, imp }
}

const fn mat(
    name: &'static str,
    density: DualValue,
    modulus: DualValue,
    expansion: DualValue,
    category: MaterialCategory,
) -> MaterialProperty {
    MaterialProperty {
        name,
        density,
        modulus,
        expansion,
        category,
    }
}

pub const MATERIALS: &[MaterialProperty] = &[
    mat("Carbon Steel (A36)", dv(7850.0, 490.0), dv(200.0, 29.0), dv(11.7, 6.5), MaterialCategory::Metal),
    mat("Stainless Steel 304", dv(8000.0, 499.4), dv(193.0, 28.0), dv(17.3, 9.6), MaterialCategory::Metal),
    mat("Stainless Steel 316", dv(8000.0, 499.4), dv(193.0, 28.0), dv(16.0, 8.9), MaterialCategory::Metal),
    mat("Aluminum 6061-T6", dv(2700.0, 168.6), dv(68.9, 10.0), dv(23.6, 13.1), MaterialCategory::Metal),
    mat("Copper (C110)", dv(8960.0, 559.4), dv(117.0, 17.0), dv(17.0, 9.4), MaterialCategory::Metal),
    mat("Brass (C360)", dv(8500.0, 530.6), dv(97.0, 14.1), dv(20.5, 11.4), MaterialCategory::Metal),
    mat("Titanium Gr 2", dv(4510.0, 281.6), dv(105.0, 15.2), dv(8.6, 4.8), MaterialCategory::Metal),
    mat("Inconel 625", dv(8440.0, 526.9), dv(205.8, 29.8), dv(12.8, 7.1), MaterialCategory::Metal),
    mat("Cast Iron (Gray)", dv(7200.0, 449.5), dv(110.0, 16.0), dv(10.8, 6.0), MaterialCategory::Metal),
    mat("PVC (Rigid)", dv(1380.0, 86.2), dv(3.0, 0.44), dv(52.0, 29.0), MaterialCategory::Plastic),
    mat("HDPE", dv(950.0, 59.3), dv(0.8, 0.12), dv(120.0, 67.0), MaterialCategory::Plastic),
    mat("PTFE (Teflon)", dv(2200.0, 137.3), dv(0.5, 0.07), dv(135.0, 75.0), MaterialCategory::Plastic),
    mat("Nylon 6/6", dv(1140.0, 71.2), dv(2.9, 0.42), dv(80.0, 44.0), MaterialCategory::Plastic),
    mat("Concrete", dv(2400.0, 149.8), dv(30.0, 4.35), dv(12.0, 6.7), MaterialCategory::Other),
    mat("Glass (Soda-Lime)", dv(2500.0, 156.1), dv(70.0, 10.2), dv(9.0, 5.0), MaterialCategory::Other),
];

pub fn materials() -> &'static [MaterialProperty] {
    MATERIALS
}

/// 이름이 정확히 일치하는 재료를 찾는다. 대소문자를 구분하지 않는다.
pub fn find_material(name: &str) -> Option<&'static MaterialProperty> {
    let name = name.trim();
    MATERIALS.iter().find(|m| m.name.eq_ignore_ascii_case(name))
}

/// 이름에 검색어가 들어 있는 재료를 표 순서대로 돌려준다. 빈 검색어는 전체.
pub fn search(query: &str) -> Vec<&'static MaterialProperty> {
    let needle = query.to_lowercase();
    MATERIALS
        .iter()
        .filter(|m| m.name.to_lowercase().contains(&needle))
        .collect()
}
