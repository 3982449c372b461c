use std::fmt::Write;
use stubdns_domain::{Message, MessageHeader};

pub fn render_message(message: &Message) -> String {
    let mut out = render_header(&message.header);

    let _ = writeln!(out);
    let _ = writeln!(out, "Question Section:");
    for question in &message.questions {
        let _ = writeln!(out, "  - {}", question);
    }

    let _ = writeln!(out);
    if message.answers.is_empty() {
        let _ = writeln!(out, "Answer Section: No records found.");
    } else {
        let _ = writeln!(out, "Answer Section:");
        for record in &message.answers {
            let _ = writeln!(out, "  - {} ({} bytes)", record, record.rdlength);
        }
    }

    out
}

pub fn render_not_a_reply(header: &MessageHeader) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Reply ID: {}", header.id);
    let _ = writeln!(out, "Flags: {}", header.flags);
    let _ = writeln!(out, "It is not a reply!");
    out
}

fn render_header(header: &MessageHeader) -> String {
    let flags = header.flags;
    let mut out = String::new();

    let _ = writeln!(out, "Reply ID: {}", header.id);
    let _ = writeln!(out, "Flags: {}", flags);
    if flags.recursion_available() {
        let _ = writeln!(out, "Recursion available");
    }
    if flags.authentic_data() {
        let _ = writeln!(out, "Answer authenticated");
    }
    if flags.truncated() {
        let _ = writeln!(out, "Reply truncated");
    }
    let _ = writeln!(out, "RCODE: {}", flags.rcode());
    let _ = writeln!(
        out,
        "QDCOUNT: {}  ANCOUNT: {}  NSCOUNT: {}  ARCOUNT: {}",
        header.qdcount, header.ancount, header.nscount, header.arcount
    );

    out
}
