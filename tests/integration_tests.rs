use airports_json::{AirportsError, Destination, Pipeline, RowFormat};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const AIRPORTS_DAT: &str = concat!(
    r#"1,"Goroka Airport","Goroka","Papua New Guinea","GKA","AYGA",-6.081689834590001,145.391998291,5282,10,"U","Pacific/Port_Moresby","airport","OurAirports""#,
    "\n",
    r#"2,"Madang Airport","Madang","Papua New Guinea","MAG","AYMD",-5.20707988739,145.789001465,20,10,"U","Pacific/Port_Moresby","airport","OurAirports""#,
    "\n",
    r#"3,"Mount Hagen Kagamuga Airport","Mount Hagen","Papua New Guinea","HGU","AYMH""#,
    "\n",
);

async fn serve(body: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/airports.dat"))
        .and(query_param("format", "raw"))
        .respond_with(body)
        .mount(&server)
        .await;
    server
}

fn dataset_url(server: &MockServer) -> String {
    format!("{}/airports.dat?format=raw", server.uri())
}

#[tokio::test]
async fn test_fetch_and_convert_raw_rows() {
    let server = serve(ResponseTemplate::new(200).set_body_string(AIRPORTS_DAT)).await;

    let json = Pipeline::new(Destination::Stdout)
        .with_url(dataset_url(&server))
        .fetch_and_convert()
        .await
        .expect("pipeline should succeed");

    let rows: Vec<Vec<String>> = serde_json::from_slice(&json).unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows.iter().map(Vec::len).collect::<Vec<_>>(),
        vec![14, 14, 6]
    );
    assert_eq!(rows[1][1], "Madang Airport");
    assert_eq!(rows[2][5], "AYMH");
}

#[tokio::test]
async fn test_one_row_per_line_with_blank_lines() {
    let body = concat!(
        r#"1,"Goroka Airport","Goroka","Papua New Guinea","GKA","AYGA""#,
        "\n",
        "\n",
        "   \r\n",
        r#"3874,"Zürich Airport","Zurich","Switzerland","ZRH","LSZH""#,
        "\r\n",
        "\r\n",
    );
    let server = serve(ResponseTemplate::new(200).set_body_string(body)).await;

    let json = Pipeline::new(Destination::Stdout)
        .with_url(dataset_url(&server))
        .fetch_and_convert()
        .await
        .unwrap();

    let rows: Vec<Vec<String>> = serde_json::from_slice(&json).unwrap();
    assert_eq!(rows.len(), body.lines().count());
    assert_eq!(
        rows.iter().map(Vec::len).collect::<Vec<_>>(),
        vec![6, 0, 1, 6, 0]
    );
    assert_eq!(rows[2], vec!["   "]);
    assert_eq!(rows[3][1], "Zürich Airport");

    assert!(json.is_ascii());
    let text = String::from_utf8(json).unwrap();
    assert!(text.contains(r#""Z\u00fcrich Airport""#));
    assert!(text.contains(r#"["1","Goroka Airport","Goroka","Papua New Guinea","GKA","AYGA"],[],["   "],"#));
}

#[tokio::test]
async fn test_typed_rows_have_numbers() {
    let server = serve(ResponseTemplate::new(200).set_body_string(AIRPORTS_DAT)).await;

    let json = Pipeline::new(Destination::Stdout)
        .with_url(dataset_url(&server))
        .with_format(RowFormat::Typed)
        .fetch_and_convert()
        .await
        .unwrap();

    let rows: Vec<Vec<serde_json::Value>> = serde_json::from_slice(&json).unwrap();
    assert_eq!(rows[0][0], serde_json::json!(1));
    assert_eq!(rows[0][8], serde_json::json!(5282));
    assert_eq!(rows[0][9], serde_json::json!(10.0));
    assert_eq!(rows[0][11], serde_json::json!("Pacific/Port_Moresby"));
    assert_eq!(rows[2].len(), 6);
}

#[tokio::test]
async fn test_run_writes_file() {
    let server = serve(ResponseTemplate::new(200).set_body_string(AIRPORTS_DAT)).await;
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("airports.json");

    let summary = Pipeline::new(Destination::File(output.clone()))
        .with_url(dataset_url(&server))
        .run()
        .await
        .unwrap();

    let written = std::fs::read(&output).unwrap();
    assert_eq!(summary.rows, 3);
    assert_eq!(summary.bytes, written.len());
    assert!(written.starts_with(br#"[["1","Goroka Airport""#));
    assert!(written.ends_with(br#""HGU","AYMH"]]"#));
}

#[tokio::test]
async fn test_repeated_runs_are_identical() {
    let server = serve(ResponseTemplate::new(200).set_body_string(AIRPORTS_DAT)).await;
    let pipeline = Pipeline::new(Destination::Stdout).with_url(dataset_url(&server));

    let first = pipeline.fetch_and_convert().await.unwrap();
    let second = pipeline.fetch_and_convert().await.unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn test_empty_body_gives_empty_array() {
    let server = serve(ResponseTemplate::new(200).set_body_string("")).await;
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("airports.json");

    let summary = Pipeline::new(Destination::File(output.clone()))
        .with_url(dataset_url(&server))
        .run()
        .await
        .unwrap();

    assert_eq!(summary.rows, 0);
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "[]");
}

#[tokio::test]
async fn test_http_error_status_aborts() {
    let server = serve(ResponseTemplate::new(500)).await;
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("airports.json");

    let err = Pipeline::new(Destination::File(output.clone()))
        .with_url(dataset_url(&server))
        .run()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        AirportsError::HttpStatus { status, .. } if status.as_u16() == 500
    ));
    assert!(!output.exists(), "no partial output on failure");
}

#[tokio::test]
async fn test_invalid_utf8_body_aborts() {
    let server = serve(ResponseTemplate::new(200).set_body_bytes(vec![b'1', b',', 0xFF])).await;

    let err = Pipeline::new(Destination::Stdout)
        .with_url(dataset_url(&server))
        .fetch_and_convert()
        .await
        .unwrap_err();

    assert!(matches!(err, AirportsError::Decode { bytes: 3 }));
}

#[tokio::test]
async fn test_unreachable_host_aborts() {
    // Bind then release a port so nothing is listening on it
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/airports.dat?format=raw", listener.local_addr().unwrap());
    drop(listener);

    let err = Pipeline::new(Destination::Stdout)
        .with_url(url)
        .fetch_and_convert()
        .await
        .unwrap_err();

    assert!(matches!(err, AirportsError::Network(_)));
}
