use crate::tests::utils::{get, ics, test_app, StubFetcher, HART_URL};

#[test]
fn schedule_downloads_as_xlsx() {
    let fetcher = StubFetcher::default().with(HART_URL, &ics(&[("20240601", "20240603", "Reserved")]));
    let app = test_app(fetcher);

    let resp = get(&app, "/schedule.xlsx?today=2024-06-01");
    assert_eq!(resp.status, 200);
    assert_eq!(
        resp.content_type,
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    // xlsx files are zip archives
    assert!(resp.body.starts_with(b"PK"));
}
