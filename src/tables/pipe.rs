/// 배관 스케줄별 두께와 내경(in).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduleWall {
    pub schedule: &'static str,
    pub wall_in: f64,
    pub id_in: f64,
}

/// ASME B36.10/B36.19 배관 치수 표의 한 행.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeScheduleEntry {
    pub nps: &'static str,
    /// 외경(in)
    pub od_in: f64,
    pub schedules: &'static [ScheduleWall],
}

/// 계측용 튜빙 치수. 외경과 두께는 표기 문자열 그대로 키로 쓴다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TubingEntry {
    pub od: &'static str,
    pub wall: &'static str,
    /// 내경(in)
    pub id_in: f64,
}

/// 배관 조회 결과. 스케줄이 없는 NPS면 두께와 내경이 0이다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipeDimensions {
    pub od_in: f64,
    pub wall_in: f64,
    pub id_in: f64,
}

impl PipeDimensions {
    pub fn id_mm(&self) -> f64 {
        self.id_in * 25.4
    }
}

const fn sch(schedule: &'static str, wall_in: f64, id_in: f64) -> ScheduleWall {
    ScheduleWall {
        schedule,
        wall_in,
        id_in,
    }
}

pub const PIPE_SCHEDULE_DATA: &[PipeScheduleEntry] = &[
    PipeScheduleEntry {
        nps: "1/8",
        od_in: 0.405,
        schedules: &[sch("10", 0.049, 0.307), sch("40", 0.068, 0.269), sch("80", 0.095, 0.215)],
    },
    PipeScheduleEntry {
        nps: "1/4",
        od_in: 0.540,
        schedules: &[sch("10", 0.065, 0.410), sch("40", 0.088, 0.364), sch("80", 0.119, 0.302)],
    },
    PipeScheduleEntry {
        nps: "3/8",
        od_in: 0.675,
        schedules: &[sch("10", 0.065, 0.545), sch("40", 0.091, 0.493), sch("80", 0.126, 0.423)],
    },
    PipeScheduleEntry {
        nps: "1/2",
        od_in: 0.840,
        schedules: &[
            sch("10", 0.083, 0.674),
            sch("40", 0.109, 0.622),
            sch("80", 0.147, 0.546),
            sch("160", 0.188, 0.464),
            sch("XXS", 0.294, 0.252),
        ],
    },
    PipeScheduleEntry {
        nps: "3/4",
        od_in: 1.050,
        schedules: &[
            sch("10", 0.083, 0.884),
            sch("40", 0.113, 0.824),
            sch("80", 0.154, 0.742),
            sch("160", 0.219, 0.612),
            sch("XXS", 0.308, 0.434),
        ],
    },
    PipeScheduleEntry {
        nps: "1",
        od_in: 1.315,
        schedules: &[
            sch("10", 0.109, 1.097),
            sch("40", 0.133, 1.049),
            sch("80", 0.179, 0.957),
            sch("160", 0.250, 0.815),
            sch("XXS", 0.358, 0.599),
        ],
    },
    PipeScheduleEntry {
        nps: "1-1/4",
        od_in: 1.660,
        schedules: &[
            sch("10", 0.109, 1.442),
            sch("40", 0.140, 1.380),
            sch("80", 0.191, 1.278),
            sch("160", 0.250, 1.160),
            sch("XXS", 0.382, 0.896),
        ],
    },
    PipeScheduleEntry {
        nps: "1-1/2",
        od_in: 1.900,
        schedules: &[
            sch("10", 0.109, 1.682),
            sch("40", 0.145, 1.610),
            sch("80", 0.200, 1.500),
            sch("160", 0.281, 1.338),
            sch("XXS", 0.400, 1.100),
        ],
    },
    PipeScheduleEntry {
        nps: "2",
        od_in: 2.375,
        schedules: &[
            sch("10", 0.109, 2.157),
            sch("40", 0.154, 2.067),
            sch("80", 0.218, 1.939),
            sch("160", 0.344, 1.687),
            sch("XXS", 0.436, 1.503),
        ],
    },
    PipeScheduleEntry {
        nps: "2-1/2",
        od_in: 2.875,
        schedules: &[
            sch("10", 0.120, 2.635),
            sch("40", 0.203, 2.469),
            sch("80", 0.276, 2.323),
            sch("160", 0.375, 2.125),
            sch("XXS", 0.552, 1.771),
        ],
    },
    PipeScheduleEntry {
        nps: "3",
        od_in: 3.500,
        schedules: &[
            sch("10", 0.120, 3.260),
            sch("40", 0.216, 3.068),
            sch("80", 0.300, 2.900),
            sch("160", 0.438, 2.624),
            sch("XXS", 0.600, 2.300),
        ],
    },
    PipeScheduleEntry {
        nps: "4",
        od_in: 4.500,
        schedules: &[
            sch("10", 0.120, 4.260),
            sch("40", 0.237, 4.026),
            sch("80", 0.337, 3.826),
            sch("120", 0.438, 3.624),
            sch("160", 0.531, 3.438),
            sch("XXS", 0.674, 3.152),
        ],
    },
    PipeScheduleEntry {
        nps: "6",
        od_in: 6.625,
        schedules: &[
            sch("10", 0.134, 6.357),
            sch("40", 0.280, 6.065),
            sch("80", 0.432, 5.761),
            sch("120", 0.562, 5.501),
            sch("160", 0.719, 5.187),
            sch("XXS", 0.864, 4.897),
        ],
    },
    PipeScheduleEntry {
        nps: "8",
        od_in: 8.625,
        schedules: &[
            sch("10", 0.148, 8.329),
            sch("20", 0.250, 8.125),
            sch("40", 0.322, 7.981),
            sch("80", 0.500, 7.625),
            sch("120", 0.719, 7.187),
            sch("160", 0.906, 6.813),
        ],
    },
    PipeScheduleEntry {
        nps: "10",
        od_in: 10.750,
        schedules: &[
            sch("10", 0.165, 10.420),
            sch("20", 0.250, 10.250),
            sch("40", 0.365, 10.020),
            sch("80", 0.594, 9.562),
            sch("120", 0.844, 9.062),
            sch("160", 1.125, 8.500),
        ],
    },
    PipeScheduleEntry {
        nps: "12",
        od_in: 12.750,
        schedules: &[
            sch("10", 0.180, 12.390),
            sch("20", 0.250, 12.250),
            sch("40", 0.406, 11.938),
            sch("80", 0.688, 11.374),
            sch("120", 1.000, 10.750),
            sch("160", 1.312, 10.126),
        ],
    },
];

pub const TUBING_DATA: &[TubingEntry] = &[
    TubingEntry { od: "1/8", wall: "0.028", id_in: 0.069 },
    TubingEntry { od: "1/8", wall: "0.035", id_in: 0.055 },
    TubingEntry { od: "1/4", wall: "0.035", id_in: 0.180 },
    TubingEntry { od: "1/4", wall: "0.049", id_in: 0.152 },
    TubingEntry { od: "1/4", wall: "0.065", id_in: 0.120 },
    TubingEntry { od: "3/8", wall: "0.035", id_in: 0.305 },
    TubingEntry { od: "3/8", wall: "0.049", id_in: 0.277 },
    TubingEntry { od: "3/8", wall: "0.065", id_in: 0.245 },
    TubingEntry { od: "1/2", wall: "0.035", id_in: 0.430 },
    TubingEntry { od: "1/2", wall: "0.049", id_in: 0.402 },
    TubingEntry { od: "1/2", wall: "0.065", id_in: 0.370 },
    TubingEntry { od: "1/2", wall: "0.083", id_in: 0.334 },
    TubingEntry { od: "3/4", wall: "0.049", id_in: 0.652 },
    TubingEntry { od: "3/4", wall: "0.065", id_in: 0.620 },
    TubingEntry { od: "3/4", wall: "0.083", id_in: 0.584 },
    TubingEntry { od: "1", wall: "0.065", id_in: 0.870 },
    TubingEntry { od: "1", wall: "0.083", id_in: 0.834 },
    TubingEntry { od: "1", wall: "0.109", id_in: 0.782 },
];

pub fn find_pipe(nps: &str) -> Option<&'static PipeScheduleEntry> {
    let nps = nps.trim();
    PIPE_SCHEDULE_DATA.iter().find(|p| p.nps == nps)
}

/// NPS와 스케줄로 배관 치수를 조회한다.
///
/// NPS가 표에 없으면 `None`, NPS는 있지만 스케줄이 없으면 외경만 채우고 두께·내경은 0이다.
pub fn pipe_dimensions(nps: &str, schedule: &str) -> Option<PipeDimensions> {
    let entry = find_pipe(nps)?;
    let schedule = schedule.trim();
    let dims = match entry
        .schedules
        .iter()
        .find(|s| s.schedule.eq_ignore_ascii_case(schedule))
    {
        Some(s) => PipeDimensions {
            od_in: entry.od_in,
            wall_in: s.wall_in,
            id_in: s.id_in,
        },
        None => PipeDimensions {
            od_in: entry.od_in,
            wall_in: 0.0,
            id_in: 0.0,
        },
    };
    Some(dims)
}

/// NPS에 대해 표에 있는 스케줄 목록. NPS가 없으면 빈 목록.
pub fn schedules_for(nps: &str) -> Vec<&'static str> {
    find_pipe(nps)
        .map(|p| p.schedules.iter().map(|s| s.schedule).collect())
        .unwrap_or_default()
}

/// 외경과 두께가 모두 일치하는 튜빙을 찾는다.
pub fn find_tubing(od: &str, wall: &str) -> Option<&'static TubingEntry> {
    let (od, wall) = (od.trim(), wall.trim());
    TUBING_DATA.iter().find(|t| t.od == od && t.wall == wall)
}

/// 표에 나온 순서대로 중복 없는 튜빙 외경 목록.
pub fn tubing_ods() -> Vec<&'static str> {
    let mut ods: Vec<&'static str> = Vec::new();
    for t in TUBING_DATA {
        if !ods.contains(&t.od) {
            ods.push(t.od);
        }
    }
    ods
}

pub fn tubing_walls(od: &str) -> Vec<&'static str> {
    let od = od.trim();
    TUBING_DATA
        .iter()
        .filter(|t| t.od == od)
        .map(|t| t.wall)
        .collect()
}
