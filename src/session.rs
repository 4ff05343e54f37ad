//! 화면 하나가 가지는 입력 상태와 파생 결과.
//!
//! 모든 입력은 사용자가 친 문자열 그대로 보관하고 결과는 요청할 때마다 다시 계산한다.
//! 계산기는 순수 함수이고, 이 세션만 활동 기록을 바꾼다.

use tracing::debug;

use crate::calculators::electrical;
use crate::calculators::ideal_gas::{self, GasState, SolveFor};
use crate::calculators::psv::{self, PsvInput, PsvResult};
use crate::calculators::torque::{bolt_torque, FrictionFactor};
use crate::calculators::wire::{self, RunLengthRow, SystemType, WireDiameter};
use crate::category::Category;
use crate::config::{Config, UnitPreset};
use crate::conversion::{self, Conversion, ConversionError};
use crate::format::parse_or_nan;
use crate::history::{ActivityLog, LogEntry};
use crate::outcome::Outcome;
use crate::tables::constants::{PhysicalConstant, PHYSICAL_CONSTANTS};
use crate::tables::flange::{find_flange, FlangeEntry};
use crate::tables::materials::{self, MaterialProperty, UnitSystem};
use crate::tables::pipe::{self, PipeDimensions, TubingEntry};
use crate::tables::steam::{display_pressure, SteamTableEntry, STEAM_TABLE_DATA};
use crate::units::{find_unit, pressure, Unit};

/// 이상기체 입력 칸.
#[derive(Debug, Clone, PartialEq)]
pub struct GasForm {
    pub pressure: String,
    pub volume: String,
    pub moles: String,
    pub temperature: String,
    pub solve_for: SolveFor,
}

impl Default for GasForm {
    fn default() -> Self {
        let d = GasState::default();
        Self {
            pressure: d.pressure_pa.to_string(),
            volume: d.volume_m3.to_string(),
            moles: d.moles.to_string(),
            temperature: d.temperature_k.to_string(),
            solve_for: SolveFor::Pressure,
        }
    }
}

/// 안전밸브 입력 칸.
#[derive(Debug, Clone, PartialEq)]
pub struct PsvForm {
    pub mass_flow: String,
    pub set_pressure: String,
    pub temperature: String,
    pub molecular_weight: String,
    pub k: String,
    pub z: String,
}

impl Default for PsvForm {
    fn default() -> Self {
        Self {
            mass_flow: "50000".to_owned(),
            set_pressure: "100".to_owned(),
            temperature: "150".to_owned(),
            molecular_weight: "28.9".to_owned(),
            k: "1.4".to_owned(),
            z: "1.0".to_owned(),
        }
    }
}

/// 전기 계산 입력 칸. 전선 표와 전력 계산이 같이 쓴다.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitForm {
    pub amps: String,
    pub volts: String,
    pub system: SystemType,
}

impl Default for CircuitForm {
    fn default() -> Self {
        Self {
            amps: "10".to_owned(),
            volts: "24".to_owned(),
            system: SystemType::Dc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipeMode {
    Pipe,
    Tubing,
}

/// 배관/튜빙 선택.
#[derive(Debug, Clone, PartialEq)]
pub struct PipeForm {
    pub mode: PipeMode,
    pub nps: String,
    pub schedule: String,
    pub tubing_od: String,
    pub tubing_wall: String,
}

impl Default for PipeForm {
    fn default() -> Self {
        Self {
            mode: PipeMode::Pipe,
            nps: "1/2".to_owned(),
            schedule: "40".to_owned(),
            tubing_od: "1/2".to_owned(),
            tubing_wall: "0.049".to_owned(),
        }
    }
}

/// 증기표 한 행과 선택 단위로 바꾼 압력 표시.
#[derive(Debug, Clone, PartialEq)]
pub struct SteamRow {
    pub entry: &'static SteamTableEntry,
    pub display_pressure: String,
}

/// 한 사용자의 작업 상태.
#[derive(Debug)]
pub struct Session {
    category: Category,
    from_unit: &'static str,
    to_unit: &'static str,
    unit_presets: Vec<UnitPreset>,
    /// 단위 변환 입력값
    pub input: String,
    pub gas: GasForm,
    pub psv: PsvForm,
    pub circuit: CircuitForm,
    pub awg: String,
    pub pipe: PipeForm,
    pub flange_nps: String,
    pub flange_class: u32,
    pub bolt_size: String,
    pub friction: FrictionFactor,
    pub steam_pressure_unit: String,
    pub material_system: UnitSystem,
    pub material_search: String,
    log: ActivityLog,
}

impl Default for Session {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// 설정의 기본값으로 세션을 만든다.
    pub fn from_config(cfg: &Config) -> Self {
        let mut session = Self {
            category: cfg.default_category,
            from_unit: "",
            to_unit: "",
            unit_presets: cfg.unit_presets.clone(),
            input: "1".to_owned(),
            gas: GasForm::default(),
            psv: PsvForm::default(),
            circuit: CircuitForm {
                system: cfg.system_type,
                ..CircuitForm::default()
            },
            awg: "12".to_owned(),
            pipe: PipeForm::default(),
            flange_nps: "2".to_owned(),
            flange_class: 150,
            bolt_size: "3/4".to_owned(),
            friction: cfg.friction_factor,
            steam_pressure_unit: cfg.steam_pressure_unit.clone(),
            material_system: cfg.material_unit_system,
            material_search: String::new(),
            log: ActivityLog::new(),
        };
        session.select_category(cfg.default_category);
        session
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// 범주를 바꾼다. 단위 변환 범주면 단위 쌍을 등록된 기본값이나 첫 두 단위로 되돌린다.
    pub fn select_category(&mut self, category: Category) {
        self.category = category;
        let Some(units) = category.units() else {
            return;
        };
        let (from, to) = self
            .preset_units(category, units)
            .unwrap_or((units[0].id, units[1].id));
        self.from_unit = from;
        self.to_unit = to;
        debug!(%category, from, to, "category selected");
    }

    fn preset_units(
        &self,
        category: Category,
        units: &'static [Unit],
    ) -> Option<(&'static str, &'static str)> {
        let preset = self.unit_presets.iter().find(|p| p.category == category)?;
        let from = find_unit(units, &preset.from)?;
        let to = find_unit(units, &preset.to)?;
        Some((from.id, to.id))
    }

    pub fn from_unit(&self) -> &'static str {
        self.from_unit
    }

    pub fn to_unit(&self) -> &'static str {
        self.to_unit
    }

    /// 현재 범주에서 변환 단위 쌍을 고른다.
    pub fn set_units(&mut self, from: &str, to: &str) -> Result<(), ConversionError> {
        let units = self
            .category
            .units()
            .ok_or(ConversionError::NotConvertible(self.category))?;
        let lookup = |id: &str| {
            find_unit(units, id).ok_or_else(|| ConversionError::UnknownUnit {
                category: self.category,
                unit: id.to_owned(),
            })
        };
        let (from, to) = (lookup(from)?, lookup(to)?);
        self.from_unit = from.id;
        self.to_unit = to.id;
        Ok(())
    }

    /// 현재 입력의 변환 결과. 기록은 남기지 않는다.
    pub fn conversion(&self) -> Outcome<Conversion> {
        conversion::convert_or_placeholder(self.category, self.from_unit, self.to_unit, &self.input)
    }

    /// 변환 결과를 표시 문자열로. 실패하면 `"0"`.
    pub fn conversion_display(&self) -> String {
        match self.conversion() {
            Outcome::Value(c) => c.display,
            Outcome::Placeholder => conversion::PLACEHOLDER.to_owned(),
        }
    }

    /// 입력을 바꾸고 변환한다. 0이 아닌 결과만 활동 기록에 남긴다.
    pub fn convert(&mut self, raw: &str) -> Outcome<Conversion> {
        self.input = raw.to_owned();
        let outcome = self.conversion();
        if let Outcome::Value(c) = &outcome {
            if c.is_nonzero() {
                self.log
                    .record(c.category, &c.input_label(), &c.result_label());
            }
        }
        outcome
    }

    pub fn history(&self) -> impl Iterator<Item = &LogEntry> {
        self.log.entries()
    }

    pub fn activity_log(&self) -> &ActivityLog {
        &self.log
    }

    /// 선택한 변수의 이상기체 해. 입력을 해석할 수 없거나 결과가 유한하지 않으면 자리표시.
    pub fn ideal_gas(&self) -> Outcome<f64> {
        let f = &self.gas;
        let state = GasState {
            pressure_pa: parse_or_nan(&f.pressure),
            volume_m3: parse_or_nan(&f.volume),
            moles: parse_or_nan(&f.moles),
            temperature_k: parse_or_nan(&f.temperature),
        };
        Outcome::finite(ideal_gas::solve(&state, f.solve_for))
    }

    pub fn ideal_gas_display(&self) -> Outcome<String> {
        let solve_for = self.gas.solve_for;
        self.ideal_gas().map(|v| solve_for.render(v))
    }

    /// 안전밸브 사이징 결과. 필수 입력이 비었으면 `None`.
    pub fn psv(&self) -> Option<PsvResult> {
        let f = &self.psv;
        let input = PsvInput {
            mass_flow_lb_per_h: parse_or_nan(&f.mass_flow),
            set_pressure_psig: parse_or_nan(&f.set_pressure),
            temperature_f: parse_or_nan(&f.temperature),
            molecular_weight: parse_or_nan(&f.molecular_weight),
            specific_heat_ratio: parse_or_nan(&f.k),
            compressibility: parse_or_nan(&f.z),
        };
        psv::size_relief_orifice(&input)
    }

    pub fn wire_size(&self) -> Option<WireDiameter> {
        wire::awg_diameter(&self.awg)
    }

    /// 현재 전류·전압·회로 방식으로 전선 표 전체의 최대 길이를 계산한다.
    pub fn run_length_rows(&self) -> Vec<RunLengthRow> {
        let c = &self.circuit;
        wire::run_length_table(parse_or_nan(&c.amps), parse_or_nan(&c.volts), c.system)
    }

    pub fn power_watts(&self) -> f64 {
        electrical::power_watts(parse_or_nan(&self.circuit.volts), parse_or_nan(&self.circuit.amps))
    }

    pub fn pipe_dimensions(&self) -> Option<PipeDimensions> {
        pipe::pipe_dimensions(&self.pipe.nps, &self.pipe.schedule)
    }

    pub fn tubing(&self) -> Option<&'static TubingEntry> {
        pipe::find_tubing(&self.pipe.tubing_od, &self.pipe.tubing_wall)
    }

    pub fn flange(&self) -> Option<&'static FlangeEntry> {
        find_flange(&self.flange_nps, self.flange_class)
    }

    pub fn torque_ft_lb(&self) -> f64 {
        bolt_torque(&self.bolt_size, self.friction)
    }

    fn steam_unit(&self) -> &'static Unit {
        find_unit(pressure::UNITS, &self.steam_pressure_unit).unwrap_or(&pressure::UNITS[0])
    }

    /// 증기표 전체를 선택 압력 단위로 표시한다. 모르는 단위면 psi.
    pub fn steam_rows(&self) -> Vec<SteamRow> {
        let unit = self.steam_unit();
        STEAM_TABLE_DATA
            .iter()
            .map(|entry| SteamRow {
                entry,
                display_pressure: display_pressure(entry, unit),
            })
            .collect()
    }

    pub fn steam_unit_name(&self) -> &'static str {
        self.steam_unit().name
    }

    /// 검색어가 이름에 포함된 재료.
    pub fn materials(&self) -> Vec<&'static MaterialProperty> {
        materials::search(&self.material_search)
    }

    pub fn constants(&self) -> &'static [PhysicalConstant] {
        PHYSICAL_CONSTANTS
    }
}
