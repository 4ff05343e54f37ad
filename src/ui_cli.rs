use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::assistant::{AskOutcome, AssistantDesk, TextAssistant};
use crate::calculators::ideal_gas::SolveFor;
use crate::calculators::torque::{to_newton_meters, FrictionFactor};
use crate::calculators::wire::SystemType;
use crate::category::Category;
use crate::config::Config;
use crate::format::{to_fixed, to_grouped};
use crate::outcome::{Outcome, NOT_AVAILABLE};
use crate::session::{PipeMode, Session};
use crate::tables::flange::{flange_classes, flange_sizes};
use crate::tables::materials::UnitSystem;
use crate::tables::pipe::{schedules_for, tubing_ods, tubing_walls, PIPE_SCHEDULE_DATA};
use crate::tables::steam;
use crate::tables::torque::TORQUE_DATA;
use crate::tables::wire::WIRE_TABLE;
use crate::units::pressure;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Module(Category),
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(session: &Session) -> Result<MenuChoice, AppError> {
    println!("\n=== BCN Engineering Suite ===");
    for (i, category) in Category::ALL.iter().enumerate() {
        let marker = if *category == session.category() { "*" } else { " " };
        println!("{marker}{:>2}) {}", i + 1, category.label());
    }
    println!("  s) Settings");
    println!("  0) Exit");
    read_menu_choice(&mut io::stdin().lock())
}

/// 메뉴 선택값을 읽는다. 입력이 끝나면 `Exit`로 본다.
pub fn read_menu_choice<R: BufRead>(input: &mut R) -> Result<MenuChoice, AppError> {
    loop {
        let sel = match read_line_from(input, "Select: ") {
            Err(err) if err.is_end_of_input() => return Ok(MenuChoice::Exit),
            other => other?,
        };
        match sel.trim() {
            "0" => return Ok(MenuChoice::Exit),
            "s" | "S" => return Ok(MenuChoice::Settings),
            other => {
                if let Some(category) = other
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| Category::ALL.get(i).copied())
                    .or_else(|| Category::from_id(other))
                {
                    return Ok(MenuChoice::Module(category));
                }
                println!("Invalid selection, try again.");
            }
        }
    }
}

/// 선택한 범주의 화면을 처리한다. 질의응답은 [`handle_ask`]가 맡는다.
pub fn handle_module(session: &mut Session) -> Result<(), AppError> {
    match session.category() {
        c if c.is_unit_category() => handle_unit_conversion(session),
        Category::IdealGas => handle_ideal_gas(session),
        Category::WireSize => handle_wire_size(session),
        Category::PipeSchedules => handle_pipe(session),
        Category::Flanges => handle_flanges(session),
        Category::Torque => handle_torque(session),
        Category::Electrical => handle_electrical(session),
        Category::Tables => handle_wire_table(session),
        Category::Constants => {
            handle_constants(session);
            Ok(())
        }
        Category::Steam => handle_steam(session),
        Category::Psv => handle_psv(session),
        Category::Materials => handle_materials(session),
        _ => Ok(()),
    }
}

fn handle_unit_conversion(session: &mut Session) -> Result<(), AppError> {
    let category = session.category();
    println!("\n-- {} --", category.label());
    let units = category.units().unwrap_or_default();
    for unit in units {
        println!("  {:<6} {}", unit.id, unit.name);
    }
    let from = read_keep("From unit", session.from_unit())?;
    let to = read_keep("To unit", session.to_unit())?;
    if let Err(err) = session.set_units(&from, &to) {
        println!("{err}");
        return Ok(());
    }
    let raw = read_keep("Value", &session.input.clone())?;
    match session.convert(&raw) {
        Outcome::Value(c) => println!("{} = {}", c.input_label(), c.result_label()),
        Outcome::Placeholder => println!("Result: {}", session.conversion_display()),
    }
    print_history(session);
    Ok(())
}

fn print_history(session: &Session) {
    if session.activity_log().is_empty() {
        return;
    }
    println!("\nRecent activity:");
    for entry in session.history() {
        println!(
            "  [{}] {:<12} {} -> {}",
            entry.timestamp,
            entry.module.label(),
            entry.input,
            entry.result
        );
    }
}

fn handle_ideal_gas(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- Ideal Gas Law (PV = nRT) --");
    let symbol = read_keep("Solve for (P, V, n, T)", session.gas.solve_for.symbol())?;
    match SolveFor::from_symbol(&symbol) {
        Some(s) => session.gas.solve_for = s,
        None => println!("Unknown variable, keeping {}.", session.gas.solve_for.symbol()),
    }
    let solve_for = session.gas.solve_for;
    let gas = &mut session.gas;
    if solve_for != SolveFor::Pressure {
        gas.pressure = read_keep("Pressure [Pa]", &gas.pressure)?;
    }
    if solve_for != SolveFor::Volume {
        gas.volume = read_keep("Volume [m³]", &gas.volume)?;
    }
    if solve_for != SolveFor::Moles {
        gas.moles = read_keep("Moles [mol]", &gas.moles)?;
    }
    if solve_for != SolveFor::Temperature {
        gas.temperature = read_keep("Temperature [K]", &gas.temperature)?;
    }
    println!(
        "{} = {} {}",
        solve_for.symbol(),
        session.ideal_gas_display().render_or(NOT_AVAILABLE),
        solve_for.unit()
    );
    Ok(())
}

fn handle_wire_size(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- AWG Wire Size --");
    let codes: Vec<&str> = WIRE_TABLE.iter().map(|w| w.awg).collect();
    println!("AWG: {}", codes.join(", "));
    session.awg = read_keep("AWG", &session.awg)?;
    match session.wire_size() {
        Some(d) => {
            println!("Area: {} mm²", d.area_display());
            println!("Diameter: {} mm ({} in)", d.mm_display(), d.inches_display());
        }
        None => println!("Diameter: {NOT_AVAILABLE}"),
    }
    Ok(())
}

fn handle_pipe(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- Pipe Schedules & Tubing --");
    let current = match session.pipe.mode {
        PipeMode::Pipe => "1",
        PipeMode::Tubing => "2",
    };
    let mode = read_keep("Mode (1=Pipe, 2=Tubing)", current)?;
    session.pipe.mode = if mode.trim() == "2" {
        PipeMode::Tubing
    } else {
        PipeMode::Pipe
    };

    match session.pipe.mode {
        PipeMode::Pipe => {
            let sizes: Vec<&str> = PIPE_SCHEDULE_DATA.iter().map(|p| p.nps).collect();
            println!("NPS: {}", sizes.join(", "));
            session.pipe.nps = read_keep("NPS", &session.pipe.nps)?;
            println!("Schedules: {}", schedules_for(&session.pipe.nps).join(", "));
            session.pipe.schedule = read_keep("Schedule", &session.pipe.schedule)?;
            match session.pipe_dimensions() {
                Some(d) => {
                    println!("OD: {}\"  Wall: {}\"", to_fixed(d.od_in, 3), to_fixed(d.wall_in, 3));
                    println!("ID: {} in ({} mm)", to_fixed(d.id_in, 3), to_fixed(d.id_mm(), 2));
                }
                None => println!("ID: {NOT_AVAILABLE}"),
            }
        }
        PipeMode::Tubing => {
            println!("OD: {}", tubing_ods().join(", "));
            session.pipe.tubing_od = read_keep("Tubing OD", &session.pipe.tubing_od)?;
            println!("Walls: {}", tubing_walls(&session.pipe.tubing_od).join(", "));
            session.pipe.tubing_wall = read_keep("Wall", &session.pipe.tubing_wall)?;
            match session.tubing() {
                Some(t) => println!(
                    "ID: {} in ({} mm)",
                    to_fixed(t.id_in, 3),
                    to_fixed(t.id_in * 25.4, 2)
                ),
                None => println!("ID: {NOT_AVAILABLE}"),
            }
        }
    }
    Ok(())
}

fn handle_flanges(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- Flange Bolting (ASME B16.5) --");
    println!("NPS: {}", flange_sizes().join(", "));
    session.flange_nps = read_keep("NPS", &session.flange_nps)?;
    let classes: Vec<String> = flange_classes().iter().map(u32::to_string).collect();
    println!("Class: {}", classes.join(", "));
    let class = read_keep("Class", &session.flange_class.to_string())?;
    match class.trim().parse::<u32>() {
        Ok(c) => session.flange_class = c,
        Err(_) => println!("Invalid class, keeping {}.", session.flange_class),
    }
    match session.flange() {
        Some(f) => {
            println!("Stud size: {}\"  Nut size: {}\"", f.stud_size, f.nut_size);
            println!("{} x {}\" Studs", f.stud_qty, f.stud_size);
        }
        None => println!("Stud size: {NOT_AVAILABLE}  Nut size: {NOT_AVAILABLE}"),
    }
    Ok(())
}

fn handle_torque(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- Bolt Torque --");
    let sizes: Vec<&str> = TORQUE_DATA.iter().map(|t| t.bolt_size).collect();
    println!("Bolt size: {}", sizes.join(", "));
    session.bolt_size = read_keep("Bolt size", &session.bolt_size)?;
    for f in FrictionFactor::ALL {
        println!("  {}", f.label());
    }
    let key = read_keep("Friction factor", session.friction.key())?;
    match FrictionFactor::from_key(&key) {
        Some(f) => session.friction = f,
        None => println!("Unknown friction factor, keeping {}.", session.friction.key()),
    }
    let ft_lb = session.torque_ft_lb();
    println!("Target torque: {ft_lb} ft-lb");
    println!("Metric: {} N·m", to_fixed(to_newton_meters(ft_lb), 1));
    Ok(())
}

fn handle_electrical(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- Electrical Power --");
    session.circuit.volts = read_keep("Voltage [V]", &session.circuit.volts)?;
    session.circuit.amps = read_keep("Current [A]", &session.circuit.amps)?;
    println!("Power: {} W", to_grouped(session.power_watts()));
    Ok(())
}

fn read_system_type(current: SystemType) -> Result<SystemType, AppError> {
    let code = read_keep("System (DC, AC1, AC3)", current.code())?;
    Ok(SystemType::from_code(&code).unwrap_or_else(|| {
        println!("Unknown system type, keeping {}.", current.code());
        current
    }))
}

fn handle_wire_table(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- Wire Table & Voltage Drop (3%) --");
    session.circuit.amps = read_keep("Load current [A]", &session.circuit.amps)?;
    session.circuit.volts = read_keep("System voltage [V]", &session.circuit.volts)?;
    session.circuit.system = read_system_type(session.circuit.system)?;
    println!(
        "{:>5} {:>9} {:>9} {:>13}",
        "AWG", "Amps", "Ω/kft", "Max run (ft)"
    );
    for row in session.run_length_rows() {
        let flag = if row.overloaded { "  OVERLOAD" } else { "" };
        println!(
            "{:>5} {:>9} {:>9} {:>13}{flag}",
            row.wire.awg,
            row.wire.ampacity_a,
            row.wire.resistance_ohm_per_kft,
            row.max_feet_display()
        );
    }
    Ok(())
}

fn handle_constants(session: &Session) {
    println!("\n-- Physical Constants --");
    for c in session.constants() {
        println!("{:<26} {:>18} {:<12} {}", c.name, c.value, c.unit, c.description);
    }
}

fn handle_steam(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- Saturated Steam Table --");
    let ids: Vec<&str> = pressure::UNITS.iter().map(|u| u.id).collect();
    println!("Pressure unit: {}", ids.join(", "));
    session.steam_pressure_unit = read_keep("Pressure unit", &session.steam_pressure_unit)?;
    println!(
        "{:>12} {:>10} {:>12} {:>12}",
        session.steam_unit_name(),
        "Temp (°F)",
        "Latent",
        "Total"
    );
    for row in session.steam_rows() {
        println!(
            "{:>12} {:>10} {:>12} {:>12}",
            row.display_pressure,
            row.entry.temp_f,
            row.entry.latent_heat_btu,
            row.entry.total_enthalpy_btu
        );
    }

    let p = read_line("Interpolate at psig (enter to skip): ")?;
    if p.trim().is_empty() {
        return Ok(());
    }
    match p.trim().parse::<f64>().ok().and_then(steam::interpolate) {
        Some(s) => println!(
            "{} psig: {} °F, latent {} BTU/lb, total {} BTU/lb",
            to_fixed(s.pressure_psig, 1),
            to_fixed(s.temp_f, 1),
            to_fixed(s.latent_heat_btu, 1),
            to_fixed(s.total_enthalpy_btu, 1)
        ),
        None => println!("Out of table range: {NOT_AVAILABLE}"),
    }
    Ok(())
}

fn handle_psv(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- PSV Sizing (API 520, gas/vapor critical flow) --");
    let f = &mut session.psv;
    f.mass_flow = read_keep("Mass flow W [lb/hr]", &f.mass_flow)?;
    f.set_pressure = read_keep("Set pressure [psig]", &f.set_pressure)?;
    f.temperature = read_keep("Relieving temperature [°F]", &f.temperature)?;
    f.molecular_weight = read_keep("Molecular weight M", &f.molecular_weight)?;
    f.k = read_keep("Specific heat ratio k", &f.k)?;
    f.z = read_keep("Compressibility Z", &f.z)?;
    match session.psv() {
        Some(r) => {
            println!("C = {}  P1 = {} psia", to_fixed(r.coefficient_c, 2), to_fixed(r.relieving_pressure_psia, 1));
            println!("Required area: {} in²", to_fixed(r.required_area_in2, 4));
            if r.is_oversize() {
                println!("Orifice: {} (exceeds largest standard orifice)", r.orifice.letter);
            } else {
                println!("Orifice: {} ({} in²)", r.orifice.letter, r.orifice.area_in2);
            }
        }
        None => println!("Required area: {NOT_AVAILABLE}"),
    }
    Ok(())
}

fn handle_materials(session: &mut Session) -> Result<(), AppError> {
    println!("\n-- Material Properties --");
    let current = match session.material_system {
        UnitSystem::Si => "SI",
        UnitSystem::Imperial => "IMP",
    };
    let system = read_keep("Unit system (SI, IMP)", current)?;
    session.material_system = match system.trim().to_ascii_uppercase().as_str() {
        "IMP" => UnitSystem::Imperial,
        _ => UnitSystem::Si,
    };
    session.material_search = read_line("Search (enter for all): ")?.trim().to_owned();
    let system = session.material_system;
    for m in session.materials() {
        println!(
            "{:<22} {:<8} {:>16} {:>12} {:>16}",
            m.name,
            format!("{:?}", m.category),
            m.density_label(system),
            m.modulus_label(system),
            m.expansion_label(system)
        );
    }
    Ok(())
}

/// 질의응답 화면. 답변이 올 때까지 기다린다.
pub async fn handle_ask<A: TextAssistant>(desk: &AssistantDesk<A>) -> Result<(), AppError> {
    println!("\n-- Engineering Assistant --");
    let query = read_line("Ask: ")?;
    match desk.submit(&query).await {
        AskOutcome::Answered(text) => println!("\n{text}"),
        AskOutcome::Busy => println!("A previous question is still being answered."),
        AskOutcome::Ignored => {}
    }
    Ok(())
}

/// 설정 메뉴를 처리한다. 바뀐 값은 현재 세션에도 바로 반영한다.
pub fn handle_settings(cfg: &mut Config, session: &mut Session) -> Result<(), AppError> {
    println!("\n-- Settings --");
    println!("1) Default module        [{}]", cfg.default_category.label());
    println!("2) Steam pressure unit   [{}]", cfg.steam_pressure_unit);
    println!(
        "3) Material unit system  [{}]",
        match cfg.material_unit_system {
            UnitSystem::Si => "SI",
            UnitSystem::Imperial => "IMP",
        }
    );
    println!("4) Friction factor       [{}]", cfg.friction_factor.label());
    println!("5) Voltage-drop system   [{}]", cfg.system_type.code());
    println!("6) Save current unit pair as default for {}", session.category().label());
    let sel = read_line("Select (enter to cancel): ")?;
    match sel.trim() {
        "" => {}
        "1" => {
            let id = read_line("Module: ")?;
            match Category::from_id(&id) {
                Some(c) => cfg.default_category = c,
                None => println!("Unknown module, unchanged."),
            }
        }
        "2" => {
            let id = read_line("Pressure unit: ")?;
            match crate::units::find_unit(pressure::UNITS, &id) {
                Some(u) => {
                    cfg.steam_pressure_unit = u.id.to_owned();
                    session.steam_pressure_unit = u.id.to_owned();
                }
                None => println!("Unknown unit, unchanged."),
            }
        }
        "3" => {
            cfg.material_unit_system = match cfg.material_unit_system {
                UnitSystem::Si => UnitSystem::Imperial,
                UnitSystem::Imperial => UnitSystem::Si,
            };
            session.material_system = cfg.material_unit_system;
        }
        "4" => {
            let key = read_line("Friction factor (0.15, 0.20): ")?;
            match FrictionFactor::from_key(&key) {
                Some(f) => {
                    cfg.friction_factor = f;
                    session.friction = f;
                }
                None => println!("Unknown friction factor, unchanged."),
            }
        }
        "5" => {
            cfg.system_type = read_system_type(cfg.system_type)?;
            session.circuit.system = cfg.system_type;
        }
        "6" => {
            if session.category().is_unit_category() {
                cfg.set_preset(session.category(), session.from_unit(), session.to_unit());
            } else {
                println!("{} has no unit pair.", session.category().label());
            }
        }
        _ => println!("Invalid selection, unchanged."),
    }
    Ok(())
}

/// 현재 값을 보여주고 새 값을 읽는다. 빈 입력이면 현재 값을 유지한다.
fn read_keep(label: &str, current: &str) -> Result<String, AppError> {
    let s = read_line(&format!("{label} [{current}]: "))?;
    let s = s.trim();
    Ok(if s.is_empty() {
        current.to_owned()
    } else {
        s.to_owned()
    })
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    read_line_from(&mut io::stdin().lock(), prompt)
}

/// 프롬프트를 출력하고 한 줄을 읽는다. 입력이 끝났으면 `UnexpectedEof` 오류.
pub fn read_line_from<R: BufRead>(input: &mut R, prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush().map_err(AppError::Io)?;
    let mut buf = String::new();
    if input.read_line(&mut buf).map_err(AppError::Io)? == 0 {
        return Err(AppError::Io(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "end of input",
        )));
    }
    Ok(buf)
}
