use search_archiver::models::load_keyword_rows;
use search_archiver::services::pdf_exporter::{artifact_file_name, PdfExporter};
use search_archiver::{App, Config};
use std::collections::HashSet;
use std::path::Path;

#[tokio::test]
async fn test_load_keyword_rows_from_file() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let file_path = dir.path().join("keywords.csv");
    std::fs::write(
        &file_path,
        "AcmeCo,pricing,2024\n测试公司,年报,2023\nOnlyTwo,columns\n",
    )
    .expect("写入关键词文件失败");

    let rows = load_keyword_rows(file_path.to_str().unwrap())
        .await
        .expect("加载关键词文件失败");

    // 不足三列的行被跳过
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].company, "AcmeCo");
    assert_eq!(rows[0].search_query(), "AcmeCo pricing 2024");
    assert_eq!(rows[1].company, "测试公司");
}

#[tokio::test]
async fn test_load_keyword_rows_missing_file() {
    let result = load_keyword_rows("no_such_keywords.csv").await;
    assert!(result.is_err(), "不存在的文件应该报错");
}

#[test]
fn test_company_folder_created_once_per_company() {
    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let config = Config {
        result_folder: dir.path().join("result").to_string_lossy().to_string(),
        ..Config::default()
    };
    let exporter = PdfExporter::new(&config);

    // 重复创建不报错，路径一致（幂等）
    let first = exporter.ensure_company_folder("AcmeCo").expect("首次创建目录失败");
    let second = exporter.ensure_company_folder("AcmeCo").expect("重复创建目录失败");
    assert_eq!(first, second);
    assert!(first.is_dir());

    // 不同公司各自一个目录
    let other = exporter.ensure_company_folder("Globex").expect("创建目录失败");
    assert_ne!(first, other);
}

#[test]
fn test_artifact_names_cover_all_pages() {
    // 一行五页的文件名互不相同且确定
    let names: Vec<String> = (1..=5)
        .map(|n| artifact_file_name("AcmeCo pricing 2024", n))
        .collect();
    assert_eq!(names[0], "AcmeCo_pricing_2024_page_1.pdf");
    assert_eq!(names[4], "AcmeCo_pricing_2024_page_5.pdf");

    let unique: HashSet<_> = names.iter().collect();
    assert_eq!(unique.len(), 5);
}

#[tokio::test]
#[ignore] // 需要本机可用的 Chromium，手动运行：cargo test -- --ignored
async fn test_browser_launch() {
    let _ = tracing_subscriber::fmt::try_init();

    let result = search_archiver::launch_headless_browser(None).await;
    assert!(result.is_ok(), "应该能够启动无头浏览器");

    if let Ok((mut browser, _page)) = result {
        let _ = browser.close().await;
        let _ = browser.wait().await;
    }
}

/// 端到端：单行关键词 → 搜索 → 导出 5 页 PDF
///
/// 需要网络和本机 Chromium，手动运行：
/// ```bash
/// cargo test test_end_to_end_single_row -- --ignored --nocapture
/// ```
#[tokio::test]
#[ignore]
async fn test_end_to_end_single_row() {
    let _ = tracing_subscriber::fmt::try_init();

    let dir = tempfile::tempdir().expect("创建临时目录失败");
    let keyword_file = dir.path().join("keywords.csv");
    std::fs::write(&keyword_file, "AcmeCo,pricing,2024\n").expect("写入关键词文件失败");

    let config = Config {
        keyword_file: keyword_file.to_string_lossy().to_string(),
        result_folder: dir.path().join("result").to_string_lossy().to_string(),
        output_log_file: dir.path().join("output.txt").to_string_lossy().to_string(),
        ..Config::default()
    };
    let result_folder = config.result_folder.clone();

    let app = App::initialize(config).await.expect("初始化应用失败");
    let stats = app.run().await.expect("运行批次失败");

    assert_eq!(stats.total, 1);
    assert_eq!(stats.completed, 1);

    // 目录: result/AcmeCo，文件: AcmeCo_pricing_2024_page_{1..5}.pdf
    let company_folder = Path::new(&result_folder).join("AcmeCo");
    assert!(company_folder.is_dir(), "应该创建公司目录");

    for page_num in 1..=5 {
        let pdf = company_folder.join(format!("AcmeCo_pricing_2024_page_{}.pdf", page_num));
        assert!(pdf.is_file(), "第 {} 页 PDF 应该存在", page_num);
        let len = std::fs::metadata(&pdf).expect("读取 PDF 元数据失败").len();
        assert!(len > 0, "第 {} 页 PDF 不应为空", page_num);
    }
}
