use chrono::NaiveDateTime;
use dto::attendance::{MealHeadcountReport, MealType};
use itertools::Itertools;

pub fn meal_type_label(meal_type: MealType) -> &'static str {
    match meal_type {
        MealType::Regular => "عادية",
        MealType::Special => "خاصة",
    }
}

// UTF-8 BOM first, then comma-joined rows, newline-separated, no trailing newline.
pub fn kitchen_csv(report: &MealHeadcountReport) -> String {
    let header = ["الاسم", "رقم الغرفة", "الكلية", "نوع الوجبة"].join(",");

    let rows = report.eligible.iter().map(|s| {
        [
            s.name.as_str(),
            s.room_number.as_str(),
            s.college.as_str(),
            meal_type_label(s.meal_type),
        ]
        .join(",")
    });

    log::debug!("kitchen csv: {} rows", report.eligible_count);
    format!(
        "\u{feff}{}",
        std::iter::once(header).chain(rows).join("\n")
    )
}

pub fn receipt_html(report: &MealHeadcountReport, generated_at: NaiveDateTime) -> String {
    let rows = report
        .eligible
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                i + 1,
                s.name,
                s.room_number,
                s.college,
                meal_type_label(s.meal_type)
            )
        })
        .join("\n");

    format!(
        r#"<!DOCTYPE html>
<html dir="rtl" lang="ar">
<head>
<meta charset="UTF-8">
<title>إيصال عدد الوجبات</title>
<style>
body {{ font-family: Arial, sans-serif; padding: 20px; direction: rtl; }}
h1 {{ color: #002147; text-align: center; }}
.summary {{ display: flex; justify-content: space-around; margin: 20px 0; }}
.summary-card {{ text-align: center; padding: 15px; border: 2px solid #ddd; border-radius: 8px; }}
.number {{ font-size: 32px; font-weight: bold; }}
table {{ width: 100%; border-collapse: collapse; margin-top: 20px; }}
th, td {{ border: 1px solid #ddd; padding: 8px; text-align: right; }}
th {{ background-color: #002147; color: white; }}
.footer {{ margin-top: 30px; text-align: center; color: #666; }}
</style>
</head>
<body>
<h1>إيصال عدد الوجبات</h1>
<p style="text-align: center;">التاريخ: {date}</p>
<div class="summary">
<div class="summary-card"><div class="number" style="color: #10B981;">{present}</div><div>إجمالي الحاضرين</div></div>
<div class="summary-card"><div class="number" style="color: #F97316;">{eligible}</div><div>مستحقين للوجبات</div></div>
<div class="summary-card"><div class="number" style="color: #6B7280;">{away}</div><div>غائبين</div></div>
</div>
<table>
<thead>
<tr><th>#</th><th>الاسم</th><th>رقم الغرفة</th><th>الكلية</th><th>نوع الوجبة</th></tr>
</thead>
<tbody>
{rows}
</tbody>
</table>
<div class="footer">
<p>نظام إدارة السكن الجامعي</p>
<p>طُبع في: {stamp}</p>
</div>
</body>
</html>"#,
        date = generated_at.date(),
        present = report.total_present,
        eligible = report.eligible_count,
        away = report.total_absent + report.total_unchecked,
        rows = rows,
        stamp = generated_at.format("%Y-%m-%d %H:%M"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::attendance::build_meal_report;
    use chrono::NaiveDate;
    use dto::attendance::{AttendanceStatus, FlatResident};

    fn eligible_three() -> MealHeadcountReport {
        let students: Vec<FlatResident> = [
            ("سعد الدين محمد", "215", MealType::Regular),
            ("عمر حسن محمود", "408", MealType::Special),
            ("خالد يوسف عبدالله", "102", MealType::Regular),
        ]
        .iter()
        .enumerate()
        .map(|(i, (name, room, meal_type))| FlatResident {
            id: format!("{}-{}", room, i),
            name: name.to_string(),
            student_no: format!("2023000{}", i),
            status: AttendanceStatus::Present,
            room_number: room.to_string(),
            floor: room.as_bytes()[0] - b'0',
            college: "كلية الآداب".to_string(),
            meal_type: *meal_type,
        })
        .collect();

        build_meal_report(&students)
    }

    #[test]
    fn csv_has_a_bom_a_header_and_one_row_per_eligible_student() {
        let csv = kitchen_csv(&eligible_three());

        assert!(csv.starts_with('\u{feff}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{feff}').split('\n').collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "الاسم,رقم الغرفة,الكلية,نوع الوجبة");
        assert_eq!(lines[1], "سعد الدين محمد,215,كلية الآداب,عادية");
        assert!(lines[2].ends_with("خاصة"));
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn csv_of_an_empty_report_is_just_the_header() {
        let report = build_meal_report(&[]);
        let csv = kitchen_csv(&report);
        assert_eq!(csv, "\u{feff}الاسم,رقم الغرفة,الكلية,نوع الوجبة");
    }

    #[test]
    fn receipt_embeds_the_three_counts_and_an_indexed_table() {
        let report = eligible_three();
        let generated = NaiveDate::from_ymd_opt(2025, 1, 30)
            .unwrap()
            .and_hms_opt(23, 15, 0)
            .unwrap();
        let html = receipt_html(&report, generated);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("dir=\"rtl\""));
        assert!(html.contains("إيصال عدد الوجبات"));
        assert!(html.contains(">3</div><div>إجمالي الحاضرين"));
        assert!(html.contains(">3</div><div>مستحقين للوجبات"));
        assert!(html.contains(">0</div><div>غائبين"));
        assert!(html.contains("<tr><td>1</td><td>سعد الدين محمد</td>"));
        assert!(html.contains("<tr><td>3</td><td>خالد يوسف عبدالله</td>"));
        assert!(html.contains("2025-01-30 23:15"));
    }

    #[test]
    fn meal_labels_render_in_arabic() {
        assert_eq!(meal_type_label(MealType::Regular), "عادية");
        assert_eq!(meal_type_label(MealType::Special), "خاصة");
    }
}
