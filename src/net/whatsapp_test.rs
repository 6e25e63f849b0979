use super::*;

#[test]
fn base_url_targets_the_whatsapp_prefix() {
    assert!(whatsapp_base_url().ends_with("/whatsapp"));
}

#[test]
fn connection_state_parses_wire_values() {
    assert_eq!(serde_json::from_str::<ConnectionState>("\"open\"").unwrap(), ConnectionState::Open);
    assert_eq!(
        serde_json::from_str::<ConnectionState>("\"close\"").unwrap(),
        ConnectionState::Close
    );
    assert_eq!(
        serde_json::from_str::<ConnectionState>("\"connecting\"").unwrap(),
        ConnectionState::Connecting
    );
}

#[test]
fn instance_status_parses_camel_case_payload() {
    let raw = r#"{
        "instanceName": "ja-main",
        "status": "open",
        "phoneNumber": "+55 62 99999-0000"
    }"#;
    let status: InstanceStatus = serde_json::from_str(raw).unwrap();
    assert_eq!(status.instance_name, "ja-main");
    assert_eq!(status.status, ConnectionState::Open);
    assert_eq!(status.phone_number.as_deref(), Some("+55 62 99999-0000"));
}

#[test]
fn absent_status_reads_as_disconnected() {
    let status = InstanceStatus::absent();
    assert_eq!(status.status, ConnectionState::Close);
    assert!(status.instance_name.is_empty());
    assert_eq!(status.tenant_id.as_deref(), Some(tenant_id()));
}

#[test]
fn qr_error_prefers_already_connected_copy() {
    let message = qr_error_message(400, Some("instance already connected"));
    assert_eq!(message, "WhatsApp já está conectado neste escritório");
}

#[test]
fn qr_error_400_falls_back_to_configuration_copy() {
    let message = qr_error_message(400, None);
    assert_eq!(message, "Erro de configuração: Verifique suas configurações");
}

#[test]
fn qr_error_maps_service_statuses() {
    assert_eq!(qr_error_message(403, None), "Sem permissão para acessar WhatsApp");
    assert_eq!(qr_error_message(404, None), "Serviço WhatsApp não encontrado");
    assert_eq!(qr_error_message(503, None), "Serviço WhatsApp temporariamente indisponível");
}

#[test]
fn qr_error_unknown_status_carries_server_message() {
    assert_eq!(
        qr_error_message(418, Some("bule de chá")),
        "Erro ao gerar QR Code: bule de chá"
    );
}

#[test]
fn service_health_parses_camel_case_payload() {
    let raw = r#"{"status": "healthy", "evolutionApi": true, "timestamp": "2025-06-30T17:00:00Z"}"#;
    let health: ServiceHealth = serde_json::from_str(raw).unwrap();
    assert!(health.evolution_api);
}
