//! # SOAP 1.2 wire format for KPS Public
//!
//! The KPS Public endpoint speaks a fixed SOAP 1.2 contract: one
//! operation, `TCKimlikNoDogrula`, with four text fields. The envelope is
//! a fixed template — field values are interpolated verbatim, with no
//! escaping beyond what the template itself provides, matching the
//! service contract. The response is located by element *local* name
//! only, so any namespace prefix the service chooses is accepted.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::KpsError;
use crate::kps::CitizenQuery;

/// Production endpoint of the KPS Public verification service.
pub const KPS_PUBLIC_ENDPOINT: &str = "https://tckimlik.nvi.gov.tr/Service/KPSPublic.asmx";

/// SOAP 1.2 envelope namespace.
pub const SOAP12_ENVELOPE_NS: &str = "http://www.w3.org/2003/05/soap-envelope";

/// KPS Public service namespace.
pub const KPS_WS_NS: &str = "http://tckimlik.nvi.gov.tr/WS";

/// Content type of the request body.
pub const SOAP_CONTENT_TYPE: &str = "application/soap+xml; charset=utf-8";

/// Local name of the response element carrying the boolean result.
const RESULT_LOCAL_NAME: &[u8] = b"TCKimlikNoDogrulaResult";

/// Render the `TCKimlikNoDogrula` request envelope for a validated query.
///
/// Field values are interpolated as plain text content. A
/// [`CitizenQuery`] only holds validated values, but nothing here escapes
/// markup-breaking characters — that constraint is documented on
/// [`PersonName`](nvi_core::PersonName).
pub fn build_verify_envelope(query: &CitizenQuery) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\
         <soap12:Envelope xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\" \
         xmlns:xsd=\"http://www.w3.org/2001/XMLSchema\" \
         xmlns:soap12=\"{soap12}\">\
         <soap12:Body>\
         <TCKimlikNoDogrula xmlns=\"{ws}\">\
         <TCKimlikNo>{identity_no}</TCKimlikNo>\
         <Ad>{first_name}</Ad>\
         <Soyad>{last_name}</Soyad>\
         <DogumYili>{birth_year}</DogumYili>\
         </TCKimlikNoDogrula>\
         </soap12:Body>\
         </soap12:Envelope>",
        soap12 = SOAP12_ENVELOPE_NS,
        ws = KPS_WS_NS,
        identity_no = query.identity_no,
        first_name = query.first_name,
        last_name = query.last_name,
        birth_year = query.birth_year,
    )
}

/// Extract the boolean verification result from a response document.
///
/// The body must contain exactly one element whose local name is
/// `TCKimlikNoDogrulaResult` (namespace prefixes are ignored); its text
/// is parsed as a boolean, trimmed and ASCII case-insensitive, matching
/// the producing service's convention.
///
/// # Errors
///
/// Returns [`KpsError::MalformedResponse`] for invalid XML, zero or
/// multiple result elements, or non-boolean result text.
pub fn parse_verify_response(body: &str) -> Result<bool, KpsError> {
    let mut reader = Reader::from_str(body.trim());

    let mut occurrences = 0usize;
    let mut capturing = false;
    let mut text = String::new();

    loop {
        let event = reader
            .read_event()
            .map_err(|e| KpsError::MalformedResponse {
                reason: format!("invalid XML: {e}"),
            })?;
        match event {
            Event::Start(e) if e.local_name().as_ref() == RESULT_LOCAL_NAME => {
                occurrences += 1;
                capturing = true;
                text.clear();
            }
            Event::Empty(e) if e.local_name().as_ref() == RESULT_LOCAL_NAME => {
                occurrences += 1;
                text.clear();
            }
            Event::End(e) if e.local_name().as_ref() == RESULT_LOCAL_NAME => {
                capturing = false;
            }
            Event::Text(t) if capturing => {
                let chunk = t.unescape().map_err(|e| KpsError::MalformedResponse {
                    reason: format!("invalid XML text: {e}"),
                })?;
                text.push_str(&chunk);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    match occurrences {
        1 => parse_boolean(&text),
        0 => Err(KpsError::MalformedResponse {
            reason: "no TCKimlikNoDogrulaResult element in response".to_string(),
        }),
        n => Err(KpsError::MalformedResponse {
            reason: format!("{n} TCKimlikNoDogrulaResult elements in response, expected one"),
        }),
    }
}

fn parse_boolean(text: &str) -> Result<bool, KpsError> {
    let trimmed = text.trim();
    if trimmed.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if trimmed.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(KpsError::MalformedResponse {
            reason: format!("result text {trimmed:?} is not a boolean"),
        })
    }
}
