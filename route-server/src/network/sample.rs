//! Bundled demo network.
//!
//! A subset of the Singapore MRT used when no edge list has been loaded,
//! and restored by a network reset.

use crate::domain::Edge;

/// (station A, station B, distance km, time min)
const SINGAPORE_MRT: &[(&str, &str, f64, f64)] = &[
    ("Jurong East", "Bukit Batok", 2.1, 7.0),
    ("Bukit Batok", "Bukit Gombak", 1.2, 5.0),
    ("Bukit Gombak", "Choa Chu Kang", 3.3, 7.0),
    ("Choa Chu Kang", "Yew Tee", 1.4, 6.0),
    ("Yew Tee", "Kranji", 4.1, 11.0),
    ("Kranji", "Marsiling", 1.7, 6.0),
    ("Marsiling", "Woodlands", 1.5, 6.0),
    ("Woodlands", "Admiralty", 1.7, 6.0),
    ("Admiralty", "Sembawang", 2.4, 6.0),
    ("Sembawang", "Yishun", 3.2, 7.0),
    ("Yishun", "Khatib", 1.4, 5.0),
    ("Khatib", "Yio Chu Kang", 4.9, 8.0),
    ("Yio Chu Kang", "Ang Mo Kio", 1.5, 6.0),
    ("Ang Mo Kio", "Bishan", 2.4, 6.0),
    ("Bishan", "Braddell", 1.2, 5.0),
    ("Braddell", "Toa Payoh", 0.9, 5.0),
    ("Toa Payoh", "Novena", 1.5, 5.0),
    ("Novena", "Newton", 1.2, 5.0),
    ("Newton", "Orchard", 1.2, 5.0),
    ("Orchard", "Somerset", 1.0, 5.0),
    ("Somerset", "Dhoby Ghaut", 0.8, 5.0),
    ("Dhoby Ghaut", "City Hall", 1.0, 5.0),
    ("City Hall", "Raffles Place", 1.0, 5.0),
    ("Raffles Place", "Marina Bay", 1.0, 5.0),
    ("Marina Bay", "Marina South Pier", 1.4, 6.0),
    ("Tuas Link", "Tuas West Road", 1.3, 5.0),
    ("Tuas West Road", "Tuas Crescent", 1.4, 5.0),
    ("Tuas Crescent", "Gul Circle", 1.7, 6.0),
    ("Gul Circle", "Joo Koon", 2.3, 6.0),
    ("Joo Koon", "Pioneer", 2.6, 6.0),
    ("Pioneer", "Boon Lay", 0.9, 5.0),
    ("Boon Lay", "Lakeside", 1.8, 7.0),
    ("Lakeside", "Chinese Garden", 1.4, 6.0),
    ("Chinese Garden", "Jurong East", 1.5, 6.0),
    ("Jurong East", "Clementi", 3.5, 7.0),
    ("Clementi", "Dover", 1.7, 6.0),
    ("Dover", "Buona Vista", 1.4, 6.0),
    ("Buona Vista", "Commonwealth", 1.1, 5.0),
    ("Commonwealth", "Queenstown", 1.2, 5.0),
    ("Queenstown", "Redhill", 1.4, 6.0),
    ("Redhill", "Tiong Bahru", 1.2, 5.0),
    ("Tiong Bahru", "Outram Park", 1.5, 6.0),
    ("Outram Park", "Tanjong Pagar", 1.0, 5.0),
    ("Tanjong Pagar", "Raffles Place", 1.2, 5.0),
    ("Raffles Place", "City Hall", 1.0, 5.0),
    ("City Hall", "Bugis", 1.0, 6.0),
    ("Bugis", "Lavender", 1.1, 5.0),
    ("Lavender", "Kallang", 1.1, 5.0),
    ("Kallang", "Aljunied", 1.4, 6.0),
    ("Aljunied", "Paya Lebar", 1.2, 5.0),
    ("Paya Lebar", "Eunos", 1.1, 5.0),
    ("Eunos", "Kembangan", 1.1, 5.0),
    ("Kembangan", "Bedok", 2.0, 6.0),
    ("Bedok", "Tanah Merah", 1.9, 6.0),
    ("Tanah Merah", "Simei", 2.5, 8.0),
    ("Simei", "Tampines", 1.4, 6.0),
    ("Tampines", "Pasir Ris", 2.4, 6.0),
    ("Tanah Merah", "Expo", 1.9, 13.0),
    ("Expo", "Changi Airport", 4.5, 14.0),
    ("HarbourFront", "Outram Park", 2.6, 7.0),
    ("Outram Park", "Chinatown", 0.7, 5.0),
    ("Chinatown", "Clarke Quay", 0.6, 5.0),
    ("Clarke Quay", "Dhoby Ghaut", 1.4, 6.0),
    ("Dhoby Ghaut", "Little India", 1.0, 5.0),
    ("Little India", "Farrer Park", 0.8, 5.0),
    ("Farrer Park", "Boon Keng", 1.2, 6.0),
    ("Boon Keng", "Potong Pasir", 1.6, 6.0),
    ("Potong Pasir", "Woodleigh", 0.9, 5.0),
    ("Woodleigh", "Serangoon", 1.2, 6.0),
    ("Serangoon", "Kovan", 1.7, 6.0),
    ("Kovan", "Hougang", 1.5, 6.0),
    ("Hougang", "Buangkok", 1.3, 6.0),
    ("Buangkok", "Sengkang", 1.1, 5.0),
    ("Sengkang", "Punggol", 1.7, 6.0),
    ("Dhoby Ghaut", "Bras Basah", 0.6, 7.0),
    ("Bras Basah", "Esplanade", 0.7, 7.0),
    ("Esplanade", "Promenade", 0.8, 7.0),
    ("Promenade", "Nicoll Highway", 0.8, 7.0),
    ("Nicoll Highway", "Stadium", 1.5, 7.0),
    ("Stadium", "Mountbatten", 0.9, 7.0),
    ("Mountbatten", "Dakota", 0.7, 7.0),
    ("Dakota", "Paya Lebar", 1.2, 7.0),
    ("Paya Lebar", "MacPherson", 1.1, 7.0),
    ("MacPherson", "Tai Seng", 1.0, 7.0),
    ("Tai Seng", "Bartley", 1.3, 8.0),
    ("Bartley", "Serangoon", 1.3, 8.0),
    ("Serangoon", "Lorong Chuan", 0.9, 7.0),
    ("Lorong Chuan", "Bishan", 1.7, 8.0),
    ("Bishan", "Marymount", 1.6, 8.0),
    ("Marymount", "Caldecott", 1.2, 7.0),
    ("Caldecott", "Botanic Gardens", 3.9, 10.0),
    ("Botanic Gardens", "Farrer Road", 1.0, 7.0),
    ("Farrer Road", "Holland Village", 1.4, 8.0),
    ("Holland Village", "Buona Vista", 0.9, 7.0),
    ("Buona Vista", "one-north", 0.8, 7.0),
    ("one-north", "Kent Ridge", 0.8, 7.0),
    ("Kent Ridge", "Haw Par Villa", 1.4, 8.0),
    ("Haw Par Villa", "Pasir Panjang", 1.3, 7.0),
    ("Pasir Panjang", "Labrador Park", 1.4, 7.0),
    ("Labrador Park", "Telok Blangah", 0.8, 7.0),
    ("Telok Blangah", "HarbourFront", 1.5, 7.0),
    ("Promenade", "Bayfront", 1.3, 6.0),
    ("Bayfront", "Marina Bay", 0.8, 8.0),
    ("Bukit Panjang", "Cashew", 1.2, 6.0),
    ("Cashew", "Hillview", 0.9, 5.0),
    ("Hillview", "Beauty World", 2.6, 9.0),
    ("Beauty World", "King Albert Park", 1.2, 6.0),
    ("King Albert Park", "Sixth Avenue", 1.6, 6.0),
    ("Sixth Avenue", "Tan Kah Kee", 1.3, 5.0),
    ("Tan Kah Kee", "Botanic Gardens", 1.1, 5.0),
    ("Botanic Gardens", "Stevens", 1.1, 5.0),
    ("Stevens", "Newton", 1.6, 6.0),
    ("Newton", "Little India", 1.4, 6.0),
    ("Little India", "Rochor", 0.5, 5.0),
    ("Rochor", "Bugis", 0.8, 5.0),
    ("Bugis", "Promenade", 0.9, 5.0),
    ("Promenade", "Bayfront", 1.3, 6.0),
    ("Bayfront", "Downtown", 0.9, 5.0),
    ("Downtown", "Telok Ayer", 0.6, 5.0),
    ("Telok Ayer", "Chinatown", 0.6, 5.0),
    ("Chinatown", "Fort Canning", 1.0, 6.0),
    ("Fort Canning", "Bencoolen", 1.0, 5.0),
    ("Bencoolen", "Jalan Besar", 0.9, 5.0),
    ("Jalan Besar", "Bendemeer", 1.3, 6.0),
    ("Bendemeer", "Geylang Bahru", 1.4, 5.0),
    ("Geylang Bahru", "Mattar", 1.5, 5.0),
    ("Mattar", "MacPherson", 0.8, 5.0),
    ("MacPherson", "Ubi", 1.1, 5.0),
    ("Ubi", "Kaki Bukit", 1.2, 5.0),
    ("Kaki Bukit", "Bedok North", 1.1, 5.0),
    ("Bedok North", "Bedok Reservoir", 1.8, 5.0),
    ("Bedok Reservoir", "Tampines West", 1.7, 6.0),
    ("Tampines West", "Tampines", 1.3, 6.0),
    ("Tampines", "Tampines East", 1.4, 5.0),
    ("Tampines East", "Upper Changi", 2.6, 7.0),
    ("Upper Changi", "Expo", 0.9, 5.0),
];

/// The demo edge list.
///
/// Contains a few repeated station pairs (e.g. Raffles Place to City Hall
/// listed once per direction) which the graph keeps as parallel edges.
pub fn sample_edges() -> Vec<Edge> {
    SINGAPORE_MRT
        .iter()
        .map(|&(a, b, distance_km, time_min)| Edge::new(a, b, distance_km, time_min))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::Graph;

    #[test]
    fn sample_edges_are_valid() {
        let edges = sample_edges();
        assert_eq!(edges.len(), 136);
        for edge in &edges {
            assert!(edge.validate().is_ok(), "invalid sample edge: {:?}", edge);
        }
    }

    #[test]
    fn sample_network_is_connected() {
        let graph = Graph::build(&sample_edges());
        assert!(graph.contains("Jurong East"));
        assert!(graph.contains("Changi Airport"));

        // Flood fill from any station reaches every other station
        let start = graph.station_id("Jurong East").unwrap();
        let mut seen = vec![false; graph.station_count()];
        let mut stack = vec![start];
        seen[start.0] = true;
        while let Some(id) = stack.pop() {
            for conn in graph.neighbors(id) {
                if !seen[conn.to.0] {
                    seen[conn.to.0] = true;
                    stack.push(conn.to);
                }
            }
        }
        assert!(seen.iter().all(|&s| s));
    }
}
