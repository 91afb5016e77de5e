//! Static Overview tab.

use dioxus::prelude::*;

const PARAGRAPHS: [&str; 3] = [
    "Tibet lies on the Tibetan Plateau in Asia and carries a long cultural and historical heritage. \
     Its political and cultural freedom has been shaped by geopolitics, and reports of restricted \
     religious practice, censorship and limited cultural autonomy have drawn international concern \
     about human rights in the region.",
    "The international community continues to call for dialogue and diplomatic solutions. Among the \
     most alarming expressions of the struggle are self-immolations: individuals, often monks and \
     nuns, setting themselves on fire in protest against restrictions on religion and the suppression \
     of Tibetan culture.",
    "Incidents have been concentrated in Tibetan areas and are often tied to grievances against \
     government policy. Many of those involved left messages about freedom, human rights and the \
     wish for cultural and religious autonomy. The charts on the other tabs trace freedom scores \
     across the region and the incidents recorded since 2013.",
];

#[component]
pub fn Overview() -> Element {
    rsx! {
        div {
            h2 { style: "font-size: 2em;", "Overview" }
            for text in PARAGRAPHS {
                p { style: "font-size: 1.2em;", "{text}" }
            }
            div {
                style: "text-align: center;",
                img {
                    src: "/assets/Tibet_map.png",
                    alt: "Map of Tibet",
                    style: "width: 45%; display: inline-block;",
                }
                img {
                    src: "/assets/selfimmo.png",
                    alt: "Self-immolation incidents",
                    style: "width: 45%; display: inline-block; margin-left: 10px;",
                }
            }
        }
    }
}
