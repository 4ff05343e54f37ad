/// 물리 상수. 값은 복사해 쓰기 좋게 문자열로 둔다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalConstant {
    pub name: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
    pub description: &'static str,
}

const fn c(
    name: &'static str,
    value: &'static str,
    unit: &'static str,
    description: &'static str,
) -> PhysicalConstant {
    PhysicalConstant {
        name,
        value,
        unit,
        description,
    }
}

pub const PHYSICAL_CONSTANTS: &[PhysicalConstant] = &[
    c("Speed of Light", "299792458", "m/s", "Exact, vacuum"),
    c("Standard Gravity", "9.80665", "m/s²", "Standard acceleration of gravity"),
    c("Universal Gas Constant", "8.314462618", "J/(mol·K)", "Molar gas constant R"),
    c("Avogadro Constant", "6.02214076e23", "1/mol", "Exact, SI 2019"),
    c("Boltzmann Constant", "1.380649e-23", "J/K", "Exact, SI 2019"),
    c("Planck Constant", "6.62607015e-34", "J·s", "Exact, SI 2019"),
    c("Elementary Charge", "1.602176634e-19", "C", "Exact, SI 2019"),
    c("Gravitational Constant", "6.67430e-11", "m³/(kg·s²)", "Newtonian constant G"),
    c("Stefan-Boltzmann Constant", "5.670374419e-8", "W/(m²·K⁴)", "Blackbody radiation"),
    c("Vacuum Permittivity", "8.8541878128e-12", "F/m", "Electric constant ε₀"),
    c("Standard Atmosphere", "101325", "Pa", "14.696 psi, 1.01325 bar"),
    c("Absolute Zero", "-273.15", "°C", "0 K, -459.67 °F"),
];

/// 이름으로 상수를 찾는다. 대소문자를 구분하지 않는다.
pub fn find_constant(name: &str) -> Option<&'static PhysicalConstant> {
    let name = name.trim();
    PHYSICAL_CONSTANTS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
}
