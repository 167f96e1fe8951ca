use inventory_core::NetworkAdapterRecord;

/// Parse `ip addr` output into one record per interface.
///
/// ```text
/// 2: eth0: <BROADCAST,MULTICAST,UP,LOWER_UP> mtu 1500 qdisc fq_codel state UP
///     link/ether aa:bb:cc:dd:ee:ff brd ff:ff:ff:ff:ff:ff
/// ```
pub fn parse_ip_addr(raw: &str) -> Vec<NetworkAdapterRecord> {
    let mut adapters = Vec::new();
    let mut current: Option<NetworkAdapterRecord> = None;

    for line in raw.lines() {
        if let Some(adapter) = parse_header(line) {
            adapters.extend(current.replace(adapter));
            continue;
        }

        let Some(adapter) = current.as_mut() else {
            continue;
        };
        if let Some(mac) = link_ether_address(line) {
            adapter.mac_address = mac.to_string();
        }
    }

    adapters.extend(current);
    adapters
}

fn parse_header(line: &str) -> Option<NetworkAdapterRecord> {
    if line.starts_with(char::is_whitespace) || !line.contains(": ") {
        return None;
    }

    let name = line.split(": ").nth(1)?.trim();
    if name.is_empty() {
        return None;
    }

    let mut adapter = NetworkAdapterRecord::new(name, has_up_flag(line));
    adapter.status = operstate(line).map(ToString::to_string);
    Some(adapter)
}

/// `UP` must appear as its own entry of the `<...>` flag list; `LOWER_UP`
/// alone does not count.
fn has_up_flag(header: &str) -> bool {
    let Some(start) = header.find('<') else {
        return false;
    };
    let Some(len) = header[start + 1..].find('>') else {
        return false;
    };

    header[start + 1..start + 1 + len]
        .split(',')
        .any(|flag| flag.trim() == "UP")
}

fn operstate(header: &str) -> Option<&str> {
    let mut tokens = header.split_whitespace();
    tokens.find(|token| *token == "state")?;
    tokens.next()
}

fn link_ether_address(line: &str) -> Option<&str> {
    let mut tokens = line.split_whitespace();
    if tokens.next()? != "link/ether" {
        return None;
    }
    tokens.next()
}
