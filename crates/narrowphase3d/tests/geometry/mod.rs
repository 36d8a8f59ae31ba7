mod box_box_resting_contact;
mod constraint_building;
mod manifold_stability;
mod narrow_phase_pass;
mod ray_cast_shapes;
mod sat_symmetry;
mod sphere_box_contact;
mod support_map_hull;
