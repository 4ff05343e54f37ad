/// ASME B16.5 플랜지 볼팅 표의 한 행. 크기는 인치 표기 문자열이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlangeEntry {
    pub nps: &'static str,
    pub class: u32,
    pub stud_size: &'static str,
    pub stud_qty: u32,
    pub nut_size: &'static str,
}

const fn fl(nps: &'static str, class: u32, stud_qty: u32, stud_size: &'static str) -> FlangeEntry {
    FlangeEntry {
        nps,
        class,
        stud_size,
        stud_qty,
        // 중량 육각 너트는 스터드 호칭경과 같다.
        nut_size: stud_size,
    }
}

pub const FLANGE_DATA: &[FlangeEntry] = &[
    fl("1/2", 150, 4, "1/2"),
    fl("3/4", 150, 4, "1/2"),
    fl("1", 150, 4, "1/2"),
    fl("1-1/2", 150, 4, "1/2"),
    fl("2", 150, 4, "5/8"),
    fl("3", 150, 4, "5/8"),
    fl("4", 150, 8, "5/8"),
    fl("6", 150, 8, "3/4"),
    fl("8", 150, 8, "3/4"),
    fl("10", 150, 12, "7/8"),
    fl("12", 150, 12, "7/8"),
    fl("1/2", 300, 4, "1/2"),
    fl("3/4", 300, 4, "5/8"),
    fl("1", 300, 4, "5/8"),
    fl("1-1/2", 300, 4, "3/4"),
    fl("2", 300, 8, "5/8"),
    fl("3", 300, 8, "3/4"),
    fl("4", 300, 8, "3/4"),
    fl("6", 300, 12, "3/4"),
    fl("8", 300, 12, "7/8"),
    fl("10", 300, 16, "1"),
    fl("12", 300, 16, "1-1/8"),
    fl("1/2", 600, 4, "1/2"),
    fl("3/4", 600, 4, "5/8"),
    fl("1", 600, 4, "5/8"),
    fl("1-1/2", 600, 4, "3/4"),
    fl("2", 600, 8, "5/8"),
    fl("3", 600, 8, "3/4"),
    fl("4", 600, 8, "7/8"),
    fl("6", 600, 12, "1"),
    fl("8", 600, 12, "1-1/8"),
    fl("10", 600, 16, "1-1/4"),
    fl("12", 600, 20, "1-1/4"),
];

/// NPS와 압력 등급이 모두 일치하는 행을 찾는다.
pub fn find_flange(nps: &str, class: u32) -> Option<&'static FlangeEntry> {
    let nps = nps.trim();
    FLANGE_DATA.iter().find(|f| f.nps == nps && f.class == class)
}

/// 표 순서대로 중복 없는 NPS 목록.
pub fn flange_sizes() -> Vec<&'static str> {
    let mut sizes: Vec<&'static str> = Vec::new();
    for f in FLANGE_DATA {
        if !sizes.contains(&f.nps) {
            sizes.push(f.nps);
        }
    }
    sizes
}

/// 오름차순으로 정렬한 압력 등급 목록.
pub fn flange_classes() -> Vec<u32> {
    let mut classes: Vec<u32> = FLANGE_DATA.iter().map(|f| f.class).collect();
    classes.sort_unstable();
    classes.dedup();
    classes
}
