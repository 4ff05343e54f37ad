//! 한 번 실행 명령과 메뉴 입력 처리 테스트.
use bcn_engineering_suite::app::{run_convert, AppError};
use bcn_engineering_suite::category::Category;
use bcn_engineering_suite::ui_cli::{read_line_from, read_menu_choice, MenuChoice};

#[test]
fn one_shot_convert_prints_result_label() {
    let out = run_convert("Pressure", "psi", "bar", "100").expect("convert");
    assert_eq!(out, "6.894760 Bar");
}

#[test]
fn one_shot_convert_turns_bad_number_into_placeholder() {
    assert_eq!(run_convert("Pressure", "psi", "bar", "abc").expect("placeholder"), "0");
    assert_eq!(run_convert("Length", "m", "ft", "").expect("placeholder"), "0");
}

#[test]
fn one_shot_convert_still_rejects_unknown_category_and_unit() {
    assert!(matches!(
        run_convert("Furlongs", "psi", "bar", "1"),
        Err(AppError::UnknownCategory(_))
    ));
    assert!(matches!(
        run_convert("Pressure", "psi", "furlong", "abc"),
        Err(AppError::Conversion(_))
    ));
}

#[test]
fn end_of_input_reads_as_exit() {
    assert_eq!(read_menu_choice(&mut "".as_bytes()).expect("menu"), MenuChoice::Exit);
    let err = read_line_from(&mut "".as_bytes(), "> ").unwrap_err();
    assert!(err.is_end_of_input());
}

#[test]
fn invalid_selection_is_retried_until_a_valid_one() {
    let choice = read_menu_choice(&mut "x\n\n3\n".as_bytes()).expect("menu");
    assert_eq!(choice, MenuChoice::Module(Category::ALL[2]));
    let choice = read_menu_choice(&mut "nope\n".as_bytes()).expect("menu");
    assert_eq!(choice, MenuChoice::Exit);
    assert_eq!(read_menu_choice(&mut "s\n".as_bytes()).expect("menu"), MenuChoice::Settings);
}
