use pocket_core::TxStatus;
use pocket_ingest::{IngestError, load_operations, read_operations};
use rust_decimal_macros::dec;
use std::io::Write;
use std::path::PathBuf;

fn operations_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .join("data")
        .join("operations.csv")
}

#[test]
fn test_fixture_export() {
    let txns = load_operations(operations_path()).unwrap();
    assert_eq!(txns.len(), 17);

    let first = &txns[0];
    assert_eq!(first.card_number, "*7197");
    assert_eq!(first.card_suffix(), Some("7197"));
    assert_eq!(first.operation_amount, dec!(-2000.00));
    assert_eq!(first.bonuses, dec!(40));
    assert_eq!(first.rounded_operation_amount, dec!(2000.00));
    assert_eq!(first.category, "Супермаркеты");

    let failed: Vec<_> = txns.iter().filter(|t| t.status == TxStatus::Failed).collect();
    assert_eq!(failed.len(), 1);
    assert_eq!(failed[0].operation_amount, dec!(-3000.00));

    let nan_cashback = txns.iter().find(|t| t.description == "IL Patio").unwrap();
    assert_eq!(nan_cashback.cashback, dec!(0.00));
}

#[test]
fn test_export_without_required_columns() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "Дата операции;Номер карты;Сумма операции").unwrap();
    writeln!(f, "31.12.2021 16:44:00;*7197;-160,89").unwrap();

    let err = load_operations(f.path()).unwrap_err();
    assert!(matches!(err, IngestError::MissingColumns(_)));
    assert!(err.to_string().contains("Кэшбэк"));
    assert!(read_operations(f.path()).is_empty());
}

#[test]
fn test_comma_delimited_export_with_bom() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    write!(
        f,
        "\u{feff}Номер карты,Статус,Дата операции,Дата платежа,Сумма операции,Валюта операции,\
         Сумма платежа,Валюта платежа,Кэшбэк,Категория,MCC,Описание,Бонусы (включая кэшбэк),\
         Округление на инвесткопилку,Сумма операции с округлением,Комментарий\n\
         *5091,OK,2021-12-30 19:06:39,2021-12-30,\"-1411,40\",RUB,-1411.40,RUB,70,Ж/д билеты,4112,РЖД,70,0,1411.40,\n"
    )
    .unwrap();

    let txns = read_operations(f.path());
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].operation_amount, dec!(-1411.40));
    assert_eq!(txns[0].payment_amount, dec!(-1411.40));
    assert!(txns[0].operation_date.is_some());
    assert_eq!(txns[0].mcc, "4112");
}

#[test]
fn test_export_file_with_one_undecodable_row() {
    let header = "Дата операции;Дата платежа;Номер карты;Статус;Сумма операции;Валюта операции;\
                  Сумма платежа;Валюта платежа;Кэшбэк;Категория;MCC;Описание;\
                  Бонусы (включая кэшбэк);Округление на инвесткопилку;Сумма операции с округлением";
    let mut f = tempfile::NamedTempFile::new().unwrap();
    writeln!(f, "{header}").unwrap();
    writeln!(f, "31.12.2021 16:44:00;31.12.2021;*7197;OK;-160,89;RUB;-160,89;RUB;;Супермаркеты;5411;Колхоз;3;0;160,89").unwrap();
    f.write_all(b"30.12.2021 10:00:00;30.12.2021;*7197;OK;-5,00;RUB;-5,00;RUB;;Cafe;5814;\xff\xfe;0;0;5,00\n")
        .unwrap();
    f.flush().unwrap();

    let txns = read_operations(f.path());
    assert_eq!(txns.len(), 1);
    assert_eq!(txns[0].description, "Колхоз");
    assert_eq!(txns[0].operation_amount, dec!(-160.89));
}
