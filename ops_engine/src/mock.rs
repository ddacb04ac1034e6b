use chrono::NaiveDate;
use dto::attendance::{
    AttendanceStatus, Building, Floor, MealType, Resident, Room, Wing, WingId,
};
use dto::fault::{Fault, FaultLocation, FaultStatus, FaultType, LocationKind, Priority};
use dto::student::{ResidencyStatus, StudentRecord};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

pub const FLOORS: u8 = 6;
pub const ROOMS_PER_WING: u8 = 8;

const WINGS: [(WingId, &str); 4] = [
    (WingId::A, "شمال A"),
    (WingId::B, "غرب B"),
    (WingId::C, "جنوب C"),
    (WingId::D, "شرق D"),
];

const ROSTER_COLLEGES: [&str; 6] = [
    "كلية الهندسة",
    "كلية الطب",
    "كلية العلوم",
    "كلية الآداب",
    "كلية إدارة الأعمال",
    "كلية الحاسبات",
];

pub const DIRECTORY_COLLEGES: [&str; 7] = [
    "الهندسة",
    "الطب",
    "العلوم",
    "الآداب",
    "التجارة",
    "الحقوق",
    "الصيدلة",
];

pub const GOVERNORATES: [&str; 7] = [
    "القاهرة",
    "الجيزة",
    "الإسكندرية",
    "الدقهلية",
    "الشرقية",
    "المنوفية",
    "القليوبية",
];

// Same seed, same building. Every roll-call starts unchecked.
pub fn generate_building(seed: u64) -> Building {
    generate(seed, false)
}

// Demo variant with the 70/20/10 present/absent/unchecked spread.
pub fn generate_demo_building(seed: u64) -> Building {
    generate(seed, true)
}

fn generate(seed: u64, with_statuses: bool) -> Building {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut floors = Vec::new();

    for number in 1..=FLOORS {
        let mut wings = Vec::new();
        for (wing_index, (id, label)) in WINGS.iter().enumerate() {
            let mut rooms = Vec::new();
            for i in 1..=ROOMS_PER_WING {
                let room_number = format!("{}{:02}", number, wing_index as u8 * 10 + i);
                let student_count = rng.gen_range(2..=4);

                let mut students = Vec::new();
                for j in 0..student_count {
                    let status = if with_statuses {
                        sample_status(&mut rng)
                    } else {
                        AttendanceStatus::Unchecked
                    };
                    let meal_type = if rng.gen::<f64>() > 0.85 {
                        MealType::Special
                    } else {
                        MealType::Regular
                    };

                    students.push(Resident {
                        id: format!("{}-{}", room_number, j),
                        name: format!("طالب {} - غرفة {}", (b'A' + j) as char, room_number),
                        student_no: (20_230_000
                            + room_number.parse::<u32>().unwrap_or(0) * 10
                            + u32::from(j))
                        .to_string(),
                        status,
                        college: ROSTER_COLLEGES[rng.gen_range(0..ROSTER_COLLEGES.len())]
                            .to_string(),
                        meal_type,
                    });
                }

                rooms.push(Room {
                    room_number,
                    students,
                });
            }
            wings.push(Wing {
                id: *id,
                label: label.to_string(),
                rooms,
            });
        }
        floors.push(Floor { number, wings });
    }

    Building { floors }
}

fn sample_status(rng: &mut StdRng) -> AttendanceStatus {
    let r: f64 = rng.gen();
    if r < 0.7 {
        AttendanceStatus::Present
    } else if r < 0.9 {
        AttendanceStatus::Absent
    } else {
        AttendanceStatus::Unchecked
    }
}

pub fn directory_records() -> Vec<StudentRecord> {
    vec![
        StudentRecord {
            id: "1".to_string(),
            name: "أحمد محمد علي".to_string(),
            college: "الهندسة".to_string(),
            year: 3,
            room_number: "301".to_string(),
            floor: 3,
            governorate: "القاهرة".to_string(),
            residency: ResidencyStatus::Regular,
            national_id: "30012345678901".to_string(),
            phone: "01012345678".to_string(),
            email: "ahmed.mohamed@university.edu".to_string(),
            has_penalties: false,
            exceeded_absence: false,
            guardian_name: "محمد علي حسن".to_string(),
            guardian_phone: "01098765432".to_string(),
            guardian_relation: "والد".to_string(),
            absence_count: 2,
            penalty_count: 0,
        },
        StudentRecord {
            id: "2".to_string(),
            name: "محمد أحمد سعد".to_string(),
            college: "الطب".to_string(),
            year: 2,
            room_number: "205".to_string(),
            floor: 2,
            governorate: "الجيزة".to_string(),
            residency: ResidencyStatus::Credit,
            national_id: "30112345678902".to_string(),
            phone: "01123456789".to_string(),
            email: "mohamed.ahmed@university.edu".to_string(),
            has_penalties: true,
            exceeded_absence: false,
            guardian_name: "أحمد سعد محمود".to_string(),
            guardian_phone: "01187654321".to_string(),
            guardian_relation: "والد".to_string(),
            absence_count: 5,
            penalty_count: 2,
        },
        StudentRecord {
            id: "3".to_string(),
            name: "خالد يوسف عبدالله".to_string(),
            college: "العلوم".to_string(),
            year: 1,
            room_number: "102".to_string(),
            floor: 1,
            governorate: "الإسكندرية".to_string(),
            residency: ResidencyStatus::Expat,
            national_id: "30212345678903".to_string(),
            phone: "01234567890".to_string(),
            email: "khaled.youssef@university.edu".to_string(),
            has_penalties: false,
            exceeded_absence: true,
            guardian_name: "يوسف عبدالله إبراهيم".to_string(),
            guardian_phone: "01276543210".to_string(),
            guardian_relation: "والد".to_string(),
            absence_count: 12,
            penalty_count: 0,
        },
        StudentRecord {
            id: "4".to_string(),
            name: "عمر حسن محمود".to_string(),
            college: "الآداب".to_string(),
            year: 4,
            room_number: "408".to_string(),
            floor: 4,
            governorate: "الدقهلية".to_string(),
            residency: ResidencyStatus::Regular,
            national_id: "30312345678904".to_string(),
            phone: "01098765433".to_string(),
            email: "omar.hassan@university.edu".to_string(),
            has_penalties: true,
            exceeded_absence: true,
            guardian_name: "حسن محمود أحمد".to_string(),
            guardian_phone: "01165432109".to_string(),
            guardian_relation: "والد".to_string(),
            absence_count: 15,
            penalty_count: 3,
        },
        StudentRecord {
            id: "5".to_string(),
            name: "سعد الدين محمد".to_string(),
            college: "التجارة".to_string(),
            year: 2,
            room_number: "215".to_string(),
            floor: 2,
            governorate: "القاهرة".to_string(),
            residency: ResidencyStatus::Regular,
            national_id: "30412345678905".to_string(),
            phone: "01187654322".to_string(),
            email: "saad.aldeen@university.edu".to_string(),
            has_penalties: false,
            exceeded_absence: false,
            guardian_name: "الدين محمد علي".to_string(),
            guardian_phone: "01254321098".to_string(),
            guardian_relation: "والد".to_string(),
            absence_count: 1,
            penalty_count: 0,
        },
        StudentRecord {
            id: "6".to_string(),
            name: "يوسف عبدالرحمن".to_string(),
            college: "الحقوق".to_string(),
            year: 3,
            room_number: "312".to_string(),
            floor: 3,
            governorate: "الشرقية".to_string(),
            residency: ResidencyStatus::Credit,
            national_id: "30512345678906".to_string(),
            phone: "01276543211".to_string(),
            email: "youssef.abdulrahman@university.edu".to_string(),
            has_penalties: false,
            exceeded_absence: false,
            guardian_name: "عبدالرحمن أحمد".to_string(),
            guardian_phone: "01343210987".to_string(),
            guardian_relation: "والد".to_string(),
            absence_count: 3,
            penalty_count: 0,
        },
        StudentRecord {
            id: "7".to_string(),
            name: "إبراهيم خالد سعد".to_string(),
            college: "الصيدلة".to_string(),
            year: 1,
            room_number: "105".to_string(),
            floor: 1,
            governorate: "المنوفية".to_string(),
            residency: ResidencyStatus::Regular,
            national_id: "30612345678907".to_string(),
            phone: "01365432100".to_string(),
            email: "ibrahim.khaled@university.edu".to_string(),
            has_penalties: true,
            exceeded_absence: false,
            guardian_name: "خالد سعد محمد".to_string(),
            guardian_phone: "01432109876".to_string(),
            guardian_relation: "والد".to_string(),
            absence_count: 7,
            penalty_count: 1,
        },
        StudentRecord {
            id: "8".to_string(),
            name: "عبدالله محمود أحمد".to_string(),
            college: "الهندسة".to_string(),
            year: 4,
            room_number: "405".to_string(),
            floor: 4,
            governorate: "القليوبية".to_string(),
            residency: ResidencyStatus::Expat,
            national_id: "30712345678908".to_string(),
            phone: "01454321099".to_string(),
            email: "abdullah.mahmoud@university.edu".to_string(),
            has_penalties: false,
            exceeded_absence: false,
            guardian_name: "محمود أحمد حسن".to_string(),
            guardian_phone: "01521098765".to_string(),
            guardian_relation: "والد".to_string(),
            absence_count: 0,
            penalty_count: 0,
        },
    ]
}

pub fn fault_board() -> Vec<Fault> {
    let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default();

    vec![
        Fault {
            id: Uuid::new_v4(),
            fault_type: FaultType::Plumbing,
            title: "تسرب مياه في الحمام".to_string(),
            description: "يوجد تسرب مياه من أنبوب المغسلة في الحمام الرئيسي".to_string(),
            location: FaultLocation {
                floor: 3,
                wing: WingId::B,
                kind: LocationKind::Room,
                room_number: Some("301".to_string()),
            },
            status: FaultStatus::Pending,
            priority: Priority::High,
            reported_by: "أحمد محمد".to_string(),
            reported_on: date(2025, 1, 29),
        },
        Fault {
            id: Uuid::new_v4(),
            fault_type: FaultType::Electric,
            title: "عطل في الإضاءة".to_string(),
            description: "الأضواء في الممر لا تعمل منذ يومين".to_string(),
            location: FaultLocation {
                floor: 2,
                wing: WingId::A,
                kind: LocationKind::Corridor,
                room_number: None,
            },
            status: FaultStatus::InProgress,
            priority: Priority::Medium,
            reported_by: "خالد علي".to_string(),
            reported_on: date(2025, 1, 28),
        },
        Fault {
            id: Uuid::new_v4(),
            fault_type: FaultType::Gas,
            title: "رائحة غاز في المطبخ".to_string(),
            description: "رائحة غاز خفيفة في منطقة المطبخ المشترك".to_string(),
            location: FaultLocation {
                floor: 1,
                wing: WingId::D,
                kind: LocationKind::Kitchen,
                room_number: None,
            },
            status: FaultStatus::Pending,
            priority: Priority::High,
            reported_by: "محمد سعد".to_string(),
            reported_on: date(2025, 1, 30),
        },
        Fault {
            id: Uuid::new_v4(),
            fault_type: FaultType::Internet,
            title: "انقطاع الإنترنت".to_string(),
            description: "الإنترنت لا يعمل في غرفة الدراسة الرئيسية".to_string(),
            location: FaultLocation {
                floor: 2,
                wing: WingId::C,
                kind: LocationKind::Study,
                room_number: None,
            },
            status: FaultStatus::InProgress,
            priority: Priority::Medium,
            reported_by: "عمر حسن".to_string(),
            reported_on: date(2025, 1, 29),
        },
        Fault {
            id: Uuid::new_v4(),
            fault_type: FaultType::Ac,
            title: "التكييف لا يبرد".to_string(),
            description: "جهاز التكييف يعمل لكن لا يخرج هواء بارد".to_string(),
            location: FaultLocation {
                floor: 4,
                wing: WingId::A,
                kind: LocationKind::Room,
                room_number: Some("405".to_string()),
            },
            status: FaultStatus::Completed,
            priority: Priority::Low,
            reported_by: "سعد الدين".to_string(),
            reported_on: date(2025, 1, 27),
        },
        Fault {
            id: Uuid::new_v4(),
            fault_type: FaultType::Plumbing,
            title: "انسداد في المصرف".to_string(),
            description: "المصرف في الحمام المشترك مسدود".to_string(),
            location: FaultLocation {
                floor: 3,
                wing: WingId::C,
                kind: LocationKind::Bathroom,
                room_number: None,
            },
            status: FaultStatus::Completed,
            priority: Priority::Medium,
            reported_by: "يوسف عبدالله".to_string(),
            reported_on: date(2025, 1, 26),
        },
    ]
}
